//! Page views.
//!
//! # Data Flow
//! ```text
//! Router resolves location
//!     → RouteMatch.component (&'static dyn View)
//!     → View::render_body(ctx)
//!     → layout.rs wraps body in the shared page shell
//! ```
//!
//! # Design Decisions
//! - Views are zero-sized statics; the route table only borrows them
//! - Identity is the view id, so two references to the same static compare equal
//! - Rendering is pure string building, no template engine

pub mod game;
pub mod layout;
pub mod personal_info;
pub mod projects;

pub use game::{Game, GAME};
pub use personal_info::{PersonalInfo, PERSONAL_INFO};
pub use projects::{MyProjects, MY_PROJECTS};

/// A link in the site navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub label: &'static str,
    pub href: String,
}

/// Everything a view needs from the router while rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Navigation links in route-table order.
    pub nav: Vec<NavLink>,
    /// Name of the route being rendered, if any.
    pub current: Option<&'static str>,
}

impl RenderContext {
    /// Look up the href of a named route.
    pub fn href(&self, name: &str) -> Option<&str> {
        self.nav
            .iter()
            .find(|link| link.name == name)
            .map(|link| link.href.as_str())
    }
}

/// A renderable page bound to a route.
pub trait View: Send + Sync + std::fmt::Debug {
    /// Stable identifier, unique per view.
    fn id(&self) -> &'static str;

    /// Document title.
    fn title(&self) -> &'static str;

    /// Label used in the navigation bar.
    fn nav_label(&self) -> &'static str {
        self.title()
    }

    /// Render the page body (without the surrounding shell).
    fn render_body(&self, ctx: &RenderContext) -> String;

    /// Render the complete HTML document.
    fn render(&self, ctx: &RenderContext) -> String {
        layout::page(self.title(), ctx, &self.render_body(ctx))
    }
}

/// Returns true if both references point at the same view.
pub fn same_view(a: &dyn View, b: &dyn View) -> bool {
    a.id() == b.id()
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
