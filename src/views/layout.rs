//! Shared page shell and the no-match page.

use std::fmt::Write;

use super::{escape_html, RenderContext};

/// Wrap a rendered body in the site shell.
pub fn page(title: &str, ctx: &RenderContext, body: &str) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape_html(title),
        nav_bar(ctx),
        body
    );
    html
}

fn nav_bar(ctx: &RenderContext) -> String {
    let mut nav = String::from("<nav>");
    for link in &ctx.nav {
        let current = if ctx.current == Some(link.name) {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = write!(
            nav,
            "<a href=\"{}\" data-route=\"{}\"{}>{}</a>",
            escape_html(&link.href),
            link.name,
            current,
            escape_html(link.label)
        );
    }
    nav.push_str("</nav>");
    nav
}

/// Page served when no route claims the requested path.
pub fn not_found(path: &str, ctx: &RenderContext) -> String {
    let home = ctx.href("home").unwrap_or("/");
    let body = format!(
        "<h1>Page not found</h1>\n<p>Nothing lives at <code>{}</code>.</p>\n<p><a href=\"{}\">Back home</a></p>",
        escape_html(path),
        escape_html(home)
    );
    page("Not found", ctx, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::NavLink;

    fn ctx() -> RenderContext {
        RenderContext {
            nav: vec![
                NavLink { name: "home", label: "Home", href: "/".into() },
                NavLink { name: "game", label: "Game", href: "/game".into() },
            ],
            current: Some("game"),
        }
    }

    #[test]
    fn test_nav_marks_current() {
        let html = page("Game", &ctx(), "<p>hi</p>");
        assert!(html.contains("<a href=\"/game\" data-route=\"game\" aria-current=\"page\">Game</a>"));
        assert!(html.contains("<a href=\"/\" data-route=\"home\">Home</a>"));
        assert!(html.contains("<title>Game</title>"));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = not_found("/<script>", &ctx());
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
