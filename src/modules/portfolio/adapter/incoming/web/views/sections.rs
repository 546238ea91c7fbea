use chrono::{Datelike, Utc};

use super::escape::{html_escape, is_real_link};
use crate::modules::portfolio::application::viewport::{NavTracker, PageViewport, SectionId};
use crate::modules::portfolio::domain::appearance::{AccentColor, AchievementIcon, SkillIcon};
use crate::modules::portfolio::domain::entities::{
    Achievement, Article, ArticleStatus, Certification, Experience, PortfolioDocument, Project,
    SkillCategory,
};

fn badges(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="badge">{}</span>"#, html_escape(item)))
        .collect()
}

fn bullet_list(items: &[String]) -> String {
    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect();
    format!("<ul>{lis}</ul>")
}

/// Opening tag with the section's anchor and enter-animation attributes.
/// Sections already on screen when the page loads start revealed.
fn section_open(id: SectionId, viewport: &PageViewport) -> String {
    let reveal = id.reveal();
    let class = if viewport.is_in_view(id) {
        r#" class="in-view""#
    } else {
        ""
    };
    format!(
        r#"<section id="{anchor}" data-reveal-once="{once}" data-reveal-amount="{amount}"{class}>"#,
        anchor = id.anchor(),
        once = reveal.once,
        amount = reveal.amount,
    )
}

fn navigation(document: &PortfolioDocument, nav: &NavTracker) -> String {
    let links: String = SectionId::ALL
        .iter()
        .map(|section| {
            let class = if *section == nav.active() {
                r#" class="active""#
            } else {
                ""
            };
            format!(
                r##"<a href="#{anchor}" data-section="{anchor}"{class}>{label}</a>"##,
                anchor = section.anchor(),
                label = section.label(),
            )
        })
        .collect();

    let cv_link = document
        .active_cv()
        .map(|cv| {
            format!(
                r#"<a class="cv-link" href="{url}" download="{name}">Download CV</a>"#,
                url = html_escape(&cv.url),
                name = html_escape(&cv.name),
            )
        })
        .unwrap_or_default();

    let nav_class = if nav.is_scrolled() {
        "site-nav scrolled"
    } else {
        "site-nav"
    };
    format!(r#"<nav class="{nav_class}">{links}{cv_link}</nav>"#)
}

fn hero(document: &PortfolioDocument, viewport: &PageViewport) -> String {
    let p = &document.profile;
    format!(
        r#"{open}
  <img src="{image}" alt="{name}" width="160" height="160" style="border-radius:50%">
  <p>{subtitle}</p>
  <h1>{name}</h1>
  <h2>{title}</h2>
  <p>{bio}</p>
  <p>{location}</p>
  <p>
    <a href="mailto:{email}">{email}</a>
    <a href="{linkedin_url}" target="_blank" rel="noopener noreferrer">{linkedin}</a>
    <a href="{github_url}" target="_blank" rel="noopener noreferrer">{github}</a>
  </p>
</section>"#,
        open = section_open(SectionId::Home, viewport),
        image = html_escape(&p.profile_image),
        name = html_escape(&p.name),
        subtitle = html_escape(&p.subtitle),
        title = html_escape(&p.title),
        bio = html_escape(&p.bio),
        location = html_escape(&p.location),
        email = html_escape(&p.email),
        linkedin_url = html_escape(&p.linkedin_url),
        linkedin = html_escape(&p.linkedin),
        github_url = html_escape(&p.github_url),
        github = html_escape(&p.github),
    )
}

fn about(document: &PortfolioDocument, viewport: &PageViewport) -> String {
    let a = &document.about;
    format!(
        r#"{open}
  <h2>About Me</h2>
  <div class="grid">
    <div class="card"><h3>{education_title}</h3><p>{education_description}</p></div>
    <div class="card"><h3>{professional_title}</h3><p>{professional_description}</p></div>
  </div>
  <p>{closing}</p>
</section>"#,
        open = section_open(SectionId::About, viewport),
        education_title = html_escape(&a.education_title),
        education_description = html_escape(&a.education_description),
        professional_title = html_escape(&a.professional_title),
        professional_description = html_escape(&a.professional_description),
        closing = html_escape(&a.closing_statement),
    )
}

fn skill_card(category: &SkillCategory) -> String {
    let icon = SkillIcon::resolve(&category.icon);
    let color = AccentColor::resolve_or(&category.color, AccentColor::Gray);
    format!(
        r#"<div class="card"><span class="icon" style="background:{bg}">{glyph}</span><h3>{title}</h3><div>{skills}</div></div>"#,
        bg = color.css_gradient(),
        glyph = icon.glyph(),
        title = html_escape(&category.title),
        skills = badges(&category.skills),
    )
}

fn experience_card(experience: &Experience) -> String {
    format!(
        r#"<div class="card">
  <h3>{title}</h3>
  <p>{company} · {location}</p>
  <p>{period}</p>
  <p>{description}</p>
  {highlights}
</div>"#,
        title = html_escape(&experience.title),
        company = html_escape(&experience.company),
        location = html_escape(&experience.location),
        period = html_escape(&experience.period),
        description = html_escape(&experience.description),
        highlights = bullet_list(&experience.highlights),
    )
}

fn project_card(project: &Project) -> String {
    let cover = project
        .cover_image
        .as_deref()
        .filter(|c| !c.is_empty())
        .or(project.images.first().map(String::as_str))
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}" style="width:100%;border-radius:.75rem">"#,
                html_escape(src),
                html_escape(&project.title)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<a class="card" href="/project/{id}">
  {cover}
  <h3>{title}</h3>
  <p>{description}</p>
  <div>{technologies}</div>
</a>"#,
        id = html_escape(&project.id),
        title = html_escape(&project.title),
        description = html_escape(&project.short_description),
        technologies = badges(&project.technologies),
    )
}

fn achievement_card(achievement: &Achievement) -> String {
    let icon = AchievementIcon::resolve(&achievement.icon);
    let color = AccentColor::resolve_or(&achievement.color, AccentColor::Gold);
    format!(
        r#"<div class="card"><span class="icon" style="background:{bg}">{glyph}</span><h3>{title}</h3><p><strong>{rank}</strong> {subrank}</p><p>{description}</p></div>"#,
        bg = color.css_gradient(),
        glyph = icon.glyph(),
        title = html_escape(&achievement.title),
        rank = html_escape(&achievement.rank),
        subrank = html_escape(&achievement.subrank),
        description = html_escape(&achievement.description),
    )
}

fn certification_card(certification: &Certification) -> String {
    let link = if is_real_link(Some(&certification.link)) {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">View Credential</a>"#,
            html_escape(&certification.link)
        )
    } else {
        String::new()
    };
    format!(
        r#"<div class="card"><h3>{title}</h3><p>{issuer}</p><p>{date}</p><div>{skills}</div>{link}</div>"#,
        title = html_escape(&certification.title),
        issuer = html_escape(&certification.issuer),
        date = html_escape(&certification.date),
        skills = badges(&certification.skills),
    )
}

fn article_card(article: &Article) -> String {
    let status = match article.status {
        ArticleStatus::ComingSoon => r#"<span class="badge">Coming Soon</span>"#.to_string(),
        ArticleStatus::Published => match article.url.as_deref() {
            Some(url) if is_real_link(Some(url)) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">Read</a>"#,
                html_escape(url)
            ),
            _ => String::new(),
        },
    };
    let cover = article
        .cover_image
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(|src| {
            format!(
                r#"<img src="{}" alt="" style="width:100%;border-radius:.75rem">"#,
                html_escape(src)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<div class="card">{cover}<h3>{title}</h3><p>{description}</p><p>{date} · {read_time}</p><div>{tags}</div>{status}</div>"#,
        title = html_escape(&article.title),
        description = html_escape(&article.description),
        date = html_escape(&article.date),
        read_time = html_escape(&article.read_time),
        tags = badges(&article.tags),
    )
}

fn card_section<T>(
    viewport: &PageViewport,
    id: SectionId,
    heading: &str,
    items: &[T],
    card: fn(&T) -> String,
) -> String {
    let cards: String = items.iter().map(card).collect();
    format!(
        r#"{open}
  <h2>{heading}</h2>
  <div class="grid">{cards}</div>
</section>"#,
        open = section_open(id, viewport),
    )
}

fn contact(document: &PortfolioDocument, viewport: &PageViewport) -> String {
    let p = &document.profile;
    format!(
        r#"{open}
  <h2>Get In Touch</h2>
  <div class="grid">
    <div class="card">
      <p>Email: <a href="mailto:{email}">{email}</a></p>
      <p>Location: {location}</p>
      <p>LinkedIn: <a href="{linkedin_url}" target="_blank" rel="noopener noreferrer">{linkedin}</a></p>
      <p>GitHub: <a href="{github_url}" target="_blank" rel="noopener noreferrer">{github}</a></p>
    </div>
    <form class="card" id="contact-form">
      <input name="name" placeholder="Your Name" required>
      <input name="email" type="email" placeholder="Your Email" required>
      <textarea name="message" rows="5" placeholder="Your Message" required></textarea>
      <button type="submit">Send Message</button>
      <p id="contact-status" role="status"></p>
    </form>
  </div>
</section>"#,
        open = section_open(SectionId::Contact, viewport),
        email = html_escape(&p.email),
        location = html_escape(&p.location),
        linkedin_url = html_escape(&p.linkedin_url),
        linkedin = html_escape(&p.linkedin),
        github_url = html_escape(&p.github_url),
        github = html_escape(&p.github),
    )
}

fn footer(document: &PortfolioDocument) -> String {
    format!(
        "<footer>© {year} {name}. All rights reserved.</footer>",
        year = Utc::now().year(),
        name = html_escape(&document.profile.name),
    )
}

/// Body of the single-page site, sections in page order, as first shown at
/// the top of the page.
pub fn render_home(document: &PortfolioDocument) -> String {
    let viewport = PageViewport::at_top();
    let v = &viewport;
    [
        navigation(document, viewport.nav()),
        "<main>".to_string(),
        hero(document, v),
        about(document, v),
        card_section(v, SectionId::Skills, "Skills", &document.skills, skill_card),
        card_section(
            v,
            SectionId::Experience,
            "Experience",
            &document.experiences,
            experience_card,
        ),
        card_section(v, SectionId::Projects, "Projects", &document.projects, project_card),
        card_section(
            v,
            SectionId::Achievements,
            "Achievements",
            &document.achievements,
            achievement_card,
        ),
        card_section(
            v,
            SectionId::Certifications,
            "Certifications",
            &document.certifications,
            certification_card,
        ),
        card_section(v, SectionId::Articles, "Articles", &document.articles, article_card),
        contact(document, v),
        "</main>".to_string(),
        footer(document),
    ]
    .concat()
}
