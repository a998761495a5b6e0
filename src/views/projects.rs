//! Project listing page.

use std::fmt::Write;

use super::{escape_html, RenderContext, View};

/// A showcased project.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Portfolio website",
        summary: "This site: a route table, three pages and a live system report.",
        url: Some("https://github.com/OvO-Tim/website"),
    },
    Project {
        name: "System monitor",
        summary: "Small JSON service reporting CPU model, load and memory usage.",
        url: None,
    },
    Project {
        name: "Number guessing game",
        summary: "A browser game playable on the game page.",
        url: None,
    },
];

#[derive(Debug)]
pub struct MyProjects;

pub static MY_PROJECTS: MyProjects = MyProjects;

impl View for MyProjects {
    fn id(&self) -> &'static str {
        "my-projects"
    }

    fn title(&self) -> &'static str {
        "Projects"
    }

    fn render_body(&self, ctx: &RenderContext) -> String {
        let mut body = String::from("<h1>Projects</h1>\n<ul class=\"projects\">\n");
        for project in PROJECTS {
            let name = match project.url {
                Some(url) => format!("<a href=\"{}\">{}</a>", escape_html(url), escape_html(project.name)),
                None => escape_html(project.name),
            };
            let _ = writeln!(
                body,
                "<li><h2>{}</h2><p>{}</p></li>",
                name,
                escape_html(project.summary)
            );
        }
        body.push_str("</ul>");
        if let Some(game) = ctx.href("game") {
            let _ = write!(body, "\n<p><a href=\"{}\">Play the game</a></p>", escape_html(game));
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_project() {
        let body = MY_PROJECTS.render_body(&RenderContext::default());
        for project in PROJECTS {
            assert!(body.contains(&escape_html(project.name)));
        }
        assert_eq!(body.matches("<li>").count(), PROJECTS.len());
    }
}
