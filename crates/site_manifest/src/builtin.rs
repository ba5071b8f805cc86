// crates/site_manifest/src/builtin.rs

//! The compiled-in guide: seven numbered sections of the aromatherapy
//! handbook, delimited in the source document by `<!-- 第N部分:... -->`
//! comments.  The last section runs until the first `<script>` tag.

use once_cell::sync::Lazy;

use crate::{NavLink, NavManifest, SectionSpec, SiteInfo, SiteManifest};

const FOOTER: &str = r#"        <div class="footer">
            <p>
                本指南专为您的健康状况定制<br>
                建议连续使用6-8周后评估效果<br>
                如有任何不适,请立即停用并咨询专业人士<br><br>
                <strong>制定日期:2025年11月</strong>
            </p>
        </div>"#;

/// The manifest used when no manifest file is supplied.
pub static BUILTIN_MANIFEST: Lazy<SiteManifest> = Lazy::new(|| SiteManifest {
    site: site_info(),
    nav: nav_manifest(),
    sections: sections(),
});

fn site_info() -> SiteInfo {
    SiteInfo {
        lang: "zh-CN".to_string(),
        site_name: "个性化芳疗方案".to_string(),
        guide_title: "个性化芳疗方案使用指南".to_string(),
        stylesheet: "styles.css".to_string(),
        base_script: "common.js".to_string(),
        home_target: "index.html".to_string(),
        subtitle: "个性化芳疗方案使用指南 · 2025年11月".to_string(),
        footer: FOOTER.to_string(),
        landing_description: "个性化芳疗方案使用指南 - 定制化精油配方与安全使用手册".to_string(),
        landing_tagline: "定制化精油配方 · 安全使用手册 · 2025年11月".to_string(),
        landing_name: "index_new.html".to_string(),
    }
}

fn nav_manifest() -> NavManifest {
    let links = [
        ("首页", "index.html"),
        ("健康状况", "health-profile.html"),
        ("精油介绍", "essential-oils.html"),
        ("安全须知", "safety.html"),
        ("配方实验", "formula-builder.html"),
        ("定制配方", "formulas.html"),
        ("使用时间", "schedule.html"),
        ("制作指南", "making.html"),
    ];
    NavManifest::new(
        links
            .iter()
            .map(|(label, target)| NavLink {
                label: label.to_string(),
                target: target.to_string(),
            })
            .collect(),
    )
}

/// `(name, part marker text, title, card label, card description, extra script)`
type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
);

const ROWS: [Row; 7] = [
    (
        "health-profile",
        "第一部分:健康状况分析",
        "健康状况分析",
        "一、健康状况分析",
        "了解您的健康状况和调理方向",
        None,
    ),
    (
        "essential-oils",
        "第二部分:精油库介绍",
        "精油库介绍",
        "二、精油库介绍",
        "17种精油的详细资料和功效说明",
        None,
    ),
    (
        "safety",
        "第三部分:安全使用须知",
        "安全使用须知",
        "三、安全使用须知",
        "重要的安全警示和使用注意事项",
        None,
    ),
    (
        "formula-builder",
        "第四部分:配方实验器",
        "配方实验器",
        "四、配方实验器",
        "创建和实验您自己的精油配方",
        Some("formula-builder.js"),
    ),
    (
        "formulas",
        "第五部分:定制配方方案",
        "定制配方方案",
        "五、定制配方方案",
        "专业的配方方案和使用指导",
        None,
    ),
    (
        "schedule",
        "第六部分:每日使用时间表",
        "每日使用时间表",
        "六、每日使用时间表",
        "详细的使用时间安排和作息建议",
        None,
    ),
    (
        "making",
        "第七部分:配方制作指南",
        "配方制作指南",
        "七、配方制作指南",
        "制作步骤、工具和保存方法",
        None,
    ),
];

fn part_marker(part: &str) -> String {
    format!("<!-- {} -->", part)
}

fn sections() -> Vec<SectionSpec> {
    ROWS.iter()
        .enumerate()
        .map(|(i, &(name, part, title, card_label, card_description, extra))| {
            // Each section ends where the next one starts; the last one stops at the page script.
            let end_marker = match ROWS.get(i + 1) {
                Some(next) => part_marker(next.1),
                None => "<script>".to_string(),
            };
            SectionSpec {
                name: name.to_string(),
                start_marker: part_marker(part),
                end_marker,
                title: title.to_string(),
                output_name: format!("{}.html", name),
                extra_resource: extra.map(str::to_string),
                card_label: card_label.to_string(),
                card_description: card_description.to_string(),
            }
        })
        .collect()
}
