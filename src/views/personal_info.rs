//! Home page: who runs this site.

use std::fmt::Write;

use super::{escape_html, RenderContext, View};

#[derive(Debug)]
pub struct PersonalInfo;

pub static PERSONAL_INFO: PersonalInfo = PersonalInfo;

const OWNER: &str = "Tim";
const TAGLINE: &str = "Software developer. I build small tools, web pages and the occasional game.";
const LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/OvO-Tim"),
];

impl View for PersonalInfo {
    fn id(&self) -> &'static str {
        "personal-info"
    }

    fn title(&self) -> &'static str {
        "About me"
    }

    fn nav_label(&self) -> &'static str {
        "Home"
    }

    fn render_body(&self, ctx: &RenderContext) -> String {
        let mut body = format!(
            "<section class=\"profile\">\n<h1>Hi, I'm {}</h1>\n<p>{}</p>\n<ul class=\"links\">",
            escape_html(OWNER),
            escape_html(TAGLINE)
        );
        for (label, url) in LINKS {
            let _ = write!(body, "<li><a href=\"{}\">{}</a></li>", escape_html(url), escape_html(label));
        }
        body.push_str("</ul>\n");
        if let Some(projects) = ctx.href("projects") {
            let _ = write!(body, "<p><a href=\"{}\">See what I've built</a></p>\n", escape_html(projects));
        }
        // Live host figures come from the /info endpoint.
        body.push_str(
            "<div id=\"system-info\" data-source=\"/info\"></div>\n\
             <script>\nfetch('/info').then(r => r.json()).then(i => {\n\
             document.getElementById('system-info').textContent =\n\
             `${i.cpu_model} | ${i.cpu_cores} cores | CPU ${i.cpu_usage}% | RAM ${i.ram_usage}% of ${i.total_memory} GB`;\n\
             }).catch(() => {});\n</script>\n</section>",
        );
        body
    }
}
