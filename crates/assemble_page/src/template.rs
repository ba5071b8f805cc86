// crates/assemble_page/src/template.rs

use site_manifest::{NavManifest, SiteInfo};

/// Everything that varies from one output document to the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// Content of the description meta tag.
    pub description: String,
    /// Content of `<title>`.
    pub page_title: String,
    /// Inserted verbatim inside the page container.
    pub body: String,
    /// Script references, emitted in this order after the container.
    pub resources: Vec<String>,
    /// Page-local CSS rules, wrapped in a `<style>` element in the head.
    pub inline_style: Option<String>,
    /// Whether the logo links back to the home page.
    pub logo_links_home: bool,
}

/// Renders one complete document: preamble, navigation, body, then the
/// resource references. Both the section pages and the landing page go
/// through here.
pub fn render_page(site: &SiteInfo, nav: &NavManifest, page: &RenderedPage) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", site.lang));
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!(
        "    <meta name=\"description\" content=\"{}\">\n",
        page.description
    ));
    html.push_str(&format!("    <title>{}</title>\n", page.page_title));
    html.push_str(&format!(
        "    <link rel=\"stylesheet\" href=\"{}\">\n",
        site.stylesheet
    ));
    if let Some(style) = &page.inline_style {
        html.push_str("    <style>\n");
        html.push_str(style.trim_end());
        html.push_str("\n    </style>\n");
    }
    html.push_str("</head>\n");
    html.push_str("<body>\n");

    html.push_str("    <!-- Fixed navigation -->\n");
    html.push_str("    <div class=\"fixed-nav\" id=\"fixedNav\">\n");
    html.push_str("        <div class=\"nav-content\">\n");
    html.push_str(&format!(
        "            <div class=\"logo\">{}</div>\n",
        render_logo(site, page.logo_links_home)
    ));
    html.push_str("            <button class=\"menu-toggle\" id=\"menuToggle\">☰</button>\n");
    html.push_str("            <nav id=\"navMenu\">\n");
    html.push_str(&render_nav_links(nav));
    html.push_str("\n            </nav>\n");
    html.push_str("        </div>\n");
    html.push_str("    </div>\n\n");

    html.push_str("    <!-- Back to top -->\n");
    html.push_str("    <button class=\"back-to-top\" id=\"backToTop\">↑</button>\n\n");

    html.push_str("    <div class=\"container\">\n");
    html.push_str(&page.body);
    html.push_str("\n    </div>\n\n");

    html.push_str(&render_script_refs(&page.resources));
    html.push_str("</body>\n");
    html.push_str("</html>");
    html
}

/// One `<a>` per manifest entry, in manifest order, newline separated.
pub fn render_nav_links(nav: &NavManifest) -> String {
    nav.links()
        .iter()
        .map(|link| format!("                <a href=\"{}\">{}</a>", link.target, link.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `<script>` line per resource, in the order given.
pub fn render_script_refs(resources: &[String]) -> String {
    resources
        .iter()
        .map(|src| format!("    <script src=\"{}\"></script>\n", src))
        .collect()
}

fn render_logo(site: &SiteInfo, links_home: bool) -> String {
    if links_home {
        format!(
            "<a href=\"{}\" style=\"text-decoration: none; color: inherit;\">{}</a>",
            site.home_target, site.site_name
        )
    } else {
        site.site_name.clone()
    }
}
