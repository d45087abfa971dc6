//! HTML for composed sections.

use crate::compose::{
    CallToAction, Card, CardGrid, CardStyle, ComposedPage, ContactButton, Hero, ImprintBlock,
    PageHeader, ProseBlock, Section, TeamSection,
};
use crate::html::{escape, markdown};

/// Render every section of a composed page, in order
pub fn render_sections(page: &ComposedPage) -> String {
    page.sections
        .iter()
        .map(|section| render_section(&section.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_section(section: &Section) -> String {
    match section {
        Section::Hero(hero) => render_hero(hero),
        Section::Header(header) => render_header(header),
        Section::CardGrid(grid) => render_card_grid(grid),
        Section::Team(team) => render_team(team),
        Section::CallToAction(cta) => render_cta(cta),
        Section::Contact(contact) => render_contact(contact),
        Section::Imprint(imprint) => render_imprint(imprint),
        Section::Prose(blocks) => render_prose(blocks),
    }
}

fn render_hero(hero: &Hero) -> String {
    let badge = match &hero.badge_href {
        Some(href) => format!(
            r#"<a class="badge" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape(href),
            escape(&hero.badge)
        ),
        None => format!(r#"<span class="badge">{}</span>"#, escape(&hero.badge)),
    };

    format!(
        r##"<section class="hero">
<div class="container">
{badge}
<h1>{statement}</h1>
<p class="tagline"><span class="tagline-brand">{tagline}</span> {tagline_end}</p>
<div class="actions">
<a class="button" href="#business-areas">{cta}</a>
<a class="button button-secondary" href="#contact">{cta_secondary}</a>
</div>
<a class="scroll-hint" href="#business-areas">{scroll}</a>
</div>
</section>"##,
        badge = badge,
        statement = escape(&hero.statement),
        tagline = escape(&hero.tagline),
        tagline_end = escape(&hero.tagline_end),
        cta = escape(&hero.cta),
        cta_secondary = escape(&hero.cta_secondary),
        scroll = escape(&hero.scroll),
    )
}

fn render_header(header: &PageHeader) -> String {
    let mut html = String::from("<section class=\"page-header\">\n<div class=\"container\">\n");
    if let Some(eyebrow) = &header.eyebrow {
        html.push_str(&format!("<p class=\"eyebrow\">{}</p>\n", escape(eyebrow)));
    }
    html.push_str(&format!("<h1>{}</h1>\n", escape(&header.title)));
    if let Some(note) = &header.note {
        html.push_str(&format!("<p class=\"note\">{}</p>\n", escape(note)));
    }
    if let Some(lead) = &header.lead {
        html.push_str(&format!("<p class=\"lead\">{}</p>\n", escape(lead)));
    }
    html.push_str("</div>\n</section>");
    html
}

fn render_card_grid(grid: &CardGrid) -> String {
    let id = grid
        .anchor
        .map(|anchor| format!(r#" id="{}""#, anchor))
        .unwrap_or_default();

    let mut heading = String::new();
    if let Some(eyebrow) = &grid.eyebrow {
        heading.push_str(&format!("<p class=\"eyebrow\">{}</p>\n", escape(eyebrow)));
    }
    if let Some(title) = &grid.title {
        heading.push_str(&format!("<h2>{}</h2>\n", escape(title)));
    }
    if let Some(intro) = &grid.intro {
        heading.push_str(&format!("<p class=\"lead\">{}</p>\n", escape(intro)));
    }

    let cards: String = grid.cards.iter().map(|card| render_card(card, grid.style)).collect();

    format!(
        r#"<section class="cards"{id}>
<div class="container">
{heading}<div class="grid {grid_class}">
{cards}</div>
</div>
</section>"#,
        id = id,
        heading = heading,
        grid_class = match grid.style {
            CardStyle::Bento => "grid-bento",
            CardStyle::Value => "grid-values",
            CardStyle::Platform => "grid-platforms",
            CardStyle::Feature => "grid-features",
        },
        cards = cards,
    )
}

fn render_card(card: &Card, style: CardStyle) -> String {
    let mut body = String::new();
    if let Some(subtitle) = &card.subtitle {
        body.push_str(&format!("<p class=\"eyebrow\">{}</p>\n", escape(subtitle)));
    }
    let heading = if style == CardStyle::Bento { "h3" } else { "h2" };
    body.push_str(&format!(
        "<{h}>{}</{h}>\n<p>{}</p>\n",
        escape(&card.title),
        escape(&card.description),
        h = heading
    ));
    if !card.items.is_empty() {
        let items: String = card
            .items
            .iter()
            .map(|item| format!("<li>{}</li>", escape(item)))
            .collect();
        body.push_str(&format!("<ul>{}</ul>\n", items));
    }

    let class = format!("card card-{} {}", card.key, card.accent.class());

    match &card.href {
        Some(href) => {
            let target = if card.external {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            if let Some(label) = &card.link_label {
                body.push_str(&format!("<span class=\"more\">{}</span>\n", escape(label)));
            }
            format!(
                "<a class=\"{}\" href=\"{}\"{}>\n{}</a>\n",
                class,
                escape(href),
                target,
                body
            )
        }
        None => format!("<article class=\"{}\">\n{}</article>\n", class, body),
    }
}

fn render_team(team: &TeamSection) -> String {
    let members: String = team
        .members
        .iter()
        .map(|member| {
            format!(
                r#"<article class="member {accent}" id="team-{id}">
<span class="avatar" aria-hidden="true">{initial}</span>
<h3>{name}</h3>
<p class="role">{role}</p>
<p>{description}</p>
</article>
"#,
                accent = member.accent.class(),
                id = escape(&member.id),
                initial = escape(&member.initial),
                name = escape(&member.name),
                role = escape(&member.role),
                description = escape(&member.description),
            )
        })
        .collect();

    format!(
        r#"<section class="team">
<div class="container">
<h2>{}</h2>
<div class="grid grid-team">
{}</div>
</div>
</section>"#,
        escape(&team.title),
        members
    )
}

fn render_cta(cta: &CallToAction) -> String {
    format!(
        r#"<section class="cta" id="contact">
<div class="container">
<h2>{}</h2>
<p>{}</p>
<a class="button" href="{}">{}</a>
</div>
</section>"#,
        escape(&cta.title),
        escape(&cta.description),
        escape(&cta.href),
        escape(&cta.button)
    )
}

fn render_contact(contact: &ContactButton) -> String {
    format!(
        r#"<section class="contact" id="contact">
<div class="container">
<a class="button" href="{}">{}</a>
</div>
</section>"#,
        escape(&contact.href),
        escape(&contact.label)
    )
}

fn render_imprint(imprint: &ImprintBlock) -> String {
    let entries: String = imprint
        .entries
        .iter()
        .map(|entry| {
            let lines = entry
                .lines
                .iter()
                .map(|line| escape(line))
                .collect::<Vec<_>>()
                .join("<br>");
            format!("<h2>{}</h2>\n<p>{}</p>\n", escape(&entry.heading), lines)
        })
        .collect();

    format!(
        r#"<section class="legal">
<div class="container prose">
<h1>{}</h1>
{}</div>
</section>"#,
        escape(&imprint.title),
        entries
    )
}

fn render_prose(blocks: &[ProseBlock]) -> String {
    let body: String = blocks
        .iter()
        .map(|block| {
            format!(
                "<section id=\"{}\">\n<h2>{}</h2>\n{}</section>\n",
                block.anchor,
                escape(&block.heading),
                markdown(&block.body)
            )
        })
        .collect();

    format!(
        r#"<section class="legal">
<div class="container prose">
{}</div>
</section>"#,
        body
    )
}
