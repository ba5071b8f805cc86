// crates/assemble_page/src/landing.rs

//! The landing document: a hero banner and one card per section.
//! Built from the manifest alone, never from the source document.

use site_manifest::{SectionSpec, SiteManifest};

use crate::template::{render_page, RenderedPage};

/// Styling used only by the landing page.
pub const LANDING_STYLE: &str = r#"        .hero {
            text-align: center;
            padding: 80px 20px;
        }
        .hero h1 {
            font-size: 48px;
            margin-bottom: 20px;
        }
        .hero p {
            font-size: 18px;
            color: var(--secondary-color);
            margin-bottom: 40px;
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 30px;
            margin: 40px 0;
        }
        .feature-card {
            background: white;
            padding: 30px;
            border-radius: 12px;
            box-shadow: var(--shadow);
            transition: var(--transition);
            text-decoration: none;
            color: inherit;
            display: block;
        }
        .feature-card:hover {
            transform: translateY(-5px);
            box-shadow: var(--shadow-hover);
        }
        .feature-card h3 {
            margin-top: 0;
            color: var(--primary-color);
        }
        .feature-card p {
            color: var(--secondary-color);
            margin-bottom: 0;
        }"#;

fn render_card(spec: &SectionSpec) -> String {
    format!(
        "            <a href=\"{}\" class=\"feature-card\">\n                <h3>{}</h3>\n                <p>{}</p>\n            </a>\n",
        spec.output_name, spec.card_label, spec.card_description
    )
}

/// Hero banner followed by the card grid.
pub fn landing_body(manifest: &SiteManifest) -> String {
    let mut body = String::new();
    body.push_str("        <div class=\"hero\">\n");
    body.push_str(&format!("            <h1>{}</h1>\n", manifest.site.guide_title));
    body.push_str(&format!("            <p>{}</p>\n", manifest.site.landing_tagline));
    body.push_str("        </div>\n\n");
    body.push_str("        <div class=\"card-grid\">\n");
    for spec in &manifest.sections {
        body.push_str(&render_card(spec));
    }
    body.push_str("        </div>");
    body
}

pub fn landing_page(manifest: &SiteManifest) -> RenderedPage {
    RenderedPage {
        description: manifest.site.landing_description.clone(),
        page_title: manifest.site.guide_title.clone(),
        body: landing_body(manifest),
        resources: vec![manifest.site.base_script.clone()],
        inline_style: Some(LANDING_STYLE.to_string()),
        logo_links_home: false,
    }
}

/// Renders the landing document.
pub fn render_landing(manifest: &SiteManifest) -> String {
    render_page(&manifest.site, &manifest.nav, &landing_page(manifest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_manifest::BUILTIN_MANIFEST;

    #[test]
    fn test_one_card_per_section_in_table_order() {
        let html = render_landing(&BUILTIN_MANIFEST);
        assert_eq!(html.matches("class=\"feature-card\"").count(), BUILTIN_MANIFEST.sections.len());
        let mut last = 0;
        for spec in &BUILTIN_MANIFEST.sections {
            let pos = html
                .find(&format!("<a href=\"{}\" class=\"feature-card\">", spec.output_name))
                .unwrap_or_else(|| panic!("missing card for {}", spec.name));
            assert!(pos > last, "card for {} out of order", spec.name);
            last = pos;
        }
    }

    #[test]
    fn test_card_contents() {
        let html = render_landing(&BUILTIN_MANIFEST);
        assert!(html.contains(
            "            <a href=\"essential-oils.html\" class=\"feature-card\">\n                <h3>二、精油库介绍</h3>\n                <p>17种精油的详细资料和功效说明</p>\n            </a>\n"
        ));
    }

    #[test]
    fn test_landing_shape() {
        let html = render_landing(&BUILTIN_MANIFEST);
        assert!(html.contains("<title>个性化芳疗方案使用指南</title>"));
        assert!(html.contains("content=\"个性化芳疗方案使用指南 - 定制化精油配方与安全使用手册\""));
        assert!(html.contains("<h1>个性化芳疗方案使用指南</h1>\n            <p>定制化精油配方 · 安全使用手册 · 2025年11月</p>"));
        assert!(html.contains("<div class=\"logo\">个性化芳疗方案</div>"));
        assert!(html.contains("    <style>\n        .hero {"));
        assert_eq!(html.matches("<script").count(), 1);
        assert!(html.contains("<script src=\"common.js\"></script>"));
    }

    #[test]
    fn test_landing_shares_nav_with_section_pages() {
        let landing = render_landing(&BUILTIN_MANIFEST);
        let spec = &BUILTIN_MANIFEST.sections[0];
        let section = crate::render_section_page(&BUILTIN_MANIFEST, spec, "x");
        let nav = crate::template::render_nav_links(&BUILTIN_MANIFEST.nav);
        assert!(landing.contains(&nav));
        assert!(section.contains(&nav));
    }

    #[test]
    fn test_landing_without_sections_has_empty_grid() {
        let mut manifest = BUILTIN_MANIFEST.clone();
        manifest.sections.clear();
        let body = landing_body(&manifest);
        assert!(body.ends_with("<div class=\"card-grid\">\n        </div>"));
    }
}
