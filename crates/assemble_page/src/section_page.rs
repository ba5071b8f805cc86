// crates/assemble_page/src/section_page.rs

use site_manifest::{SectionSpec, SiteInfo, SiteManifest};

use crate::template::{render_page, RenderedPage};

/// Heading, subtitle, the extracted body, then the shared footer.
/// Only the heading differs between pages.
pub fn compose_section_body(site: &SiteInfo, title: &str, section_body: &str) -> String {
    format!(
        "        <h1>{}</h1>\n        <p class=\"subtitle\">{}</p>\n\n        {}\n{}",
        title, site.subtitle, section_body, site.footer
    )
}

/// The base script first, then the section's extra resource if it has one.
/// Each script appears once.
pub fn section_resources(site: &SiteInfo, spec: &SectionSpec) -> Vec<String> {
    let mut resources = vec![site.base_script.clone()];
    if let Some(extra) = &spec.extra_resource {
        if !resources.contains(extra) {
            resources.push(extra.clone());
        }
    }
    resources
}

pub fn section_page(site: &SiteInfo, spec: &SectionSpec, section_body: &str) -> RenderedPage {
    RenderedPage {
        description: spec.title.clone(),
        page_title: format!("{} - {}", spec.title, site.site_name),
        body: compose_section_body(site, &spec.title, section_body),
        resources: section_resources(site, spec),
        inline_style: None,
        logo_links_home: true,
    }
}

/// Renders the standalone document for one extracted section.
pub fn render_section_page(manifest: &SiteManifest, spec: &SectionSpec, section_body: &str) -> String {
    let page = section_page(&manifest.site, spec, section_body);
    render_page(&manifest.site, &manifest.nav, &page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_manifest::BUILTIN_MANIFEST;

    fn formula_builder() -> &'static SectionSpec {
        BUILTIN_MANIFEST.section("formula-builder").unwrap()
    }

    fn safety() -> &'static SectionSpec {
        BUILTIN_MANIFEST.section("safety").unwrap()
    }

    #[test]
    fn test_compose_section_body_layout() {
        let body = compose_section_body(&BUILTIN_MANIFEST.site, "安全使用须知", "<div>rules</div>");
        assert!(body.starts_with(
            "        <h1>安全使用须知</h1>\n        <p class=\"subtitle\">个性化芳疗方案使用指南 · 2025年11月</p>\n\n        <div>rules</div>\n"
        ));
        assert!(body.ends_with("        </div>"));
        assert!(body.contains("<strong>制定日期:2025年11月</strong>"));
    }

    #[test]
    fn test_footer_identical_across_pages() {
        let site = &BUILTIN_MANIFEST.site;
        let a = compose_section_body(site, "A", "x");
        let b = compose_section_body(site, "B", "x");
        assert_eq!(a.replace("<h1>A</h1>", ""), b.replace("<h1>B</h1>", ""));
    }

    #[test]
    fn test_section_resources() {
        let site = &BUILTIN_MANIFEST.site;
        assert_eq!(section_resources(site, safety()), vec!["common.js"]);
        assert_eq!(
            section_resources(site, formula_builder()),
            vec!["common.js", "formula-builder.js"]
        );
    }

    #[test]
    fn test_extra_resource_equal_to_base_script_is_not_repeated() {
        let mut manifest = BUILTIN_MANIFEST.clone();
        manifest.sections[0].extra_resource = Some("common.js".to_string());
        manifest.validate().expect("manifest still validates");
        let spec = &manifest.sections[0];
        assert_eq!(section_resources(&manifest.site, spec), vec!["common.js"]);
        let html = render_section_page(&manifest, spec, "body");
        assert_eq!(html.matches("<script src=\"common.js\"></script>").count(), 1);
    }

    #[test]
    fn test_section_page_titles() {
        let page = section_page(&BUILTIN_MANIFEST.site, safety(), "body");
        assert_eq!(page.description, "安全使用须知");
        assert_eq!(page.page_title, "安全使用须知 - 个性化芳疗方案");
        assert!(page.logo_links_home);
        assert!(page.inline_style.is_none());
    }

    #[test]
    fn test_render_section_page_with_extra_script() {
        let html = render_section_page(&BUILTIN_MANIFEST, formula_builder(), "<div id=\"builder\"></div>");
        assert!(html.contains(
            "    <script src=\"common.js\"></script>\n    <script src=\"formula-builder.js\"></script>\n</body>"
        ));
        assert!(html.contains("<div id=\"builder\"></div>"));
        assert!(html.contains("<title>配方实验器 - 个性化芳疗方案</title>"));
    }

    #[test]
    fn test_render_section_page_without_extra_script() {
        let html = render_section_page(&BUILTIN_MANIFEST, safety(), "rules");
        assert_eq!(html.matches("<script").count(), 1);
        for link in BUILTIN_MANIFEST.nav.links() {
            assert!(html.contains(&format!("<a href=\"{}\">{}</a>", link.target, link.label)));
        }
    }
}
