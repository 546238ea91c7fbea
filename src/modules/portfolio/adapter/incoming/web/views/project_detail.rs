use super::escape::{html_escape, is_real_link};
use crate::modules::portfolio::domain::entities::Project;

pub const FALLBACK_COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1667264501379-c1537934c7ab?w=1200";

fn cover_image(project: &Project) -> &str {
    project
        .cover_image
        .as_deref()
        .filter(|c| !c.is_empty())
        .or(project.images.first().map(String::as_str))
        .unwrap_or(FALLBACK_COVER_IMAGE)
}

/// Embed URL for YouTube links; other video hosts are not embedded.
fn video_embed_url(video_url: Option<&str>) -> Option<String> {
    video_url
        .filter(|url| url.contains("youtube"))
        .map(|url| url.replace("watch?v=", "embed/"))
}

fn link_buttons(project: &Project) -> String {
    let links = [
        (project.github_url.as_deref(), "View Code"),
        (project.live_url.as_deref(), "Live Demo"),
        (project.documentation_url.as_deref(), "Documentation"),
        (project.report_url.as_deref(), "Report"),
    ];
    links
        .into_iter()
        .filter(|(url, _)| is_real_link(*url))
        .filter_map(|(url, label)| {
            url.map(|url| {
                format!(
                    r#"<a class="badge" href="{}" target="_blank" rel="noopener noreferrer">{label}</a>"#,
                    html_escape(url)
                )
            })
        })
        .collect()
}

pub fn render_project_detail(project: &Project) -> String {
    let title = html_escape(&project.title);

    let gallery = if project.images.len() > 1 {
        let images: String = project
            .images
            .iter()
            .enumerate()
            .map(|(i, src)| {
                format!(
                    r#"<img src="{}" alt="{title} screenshot {}" style="width:100%;border-radius:.75rem">"#,
                    html_escape(src),
                    i + 1
                )
            })
            .collect();
        format!(r#"<h2>Gallery</h2><div class="grid">{images}</div>"#)
    } else {
        String::new()
    };

    let video = video_embed_url(project.video_url.as_deref())
        .map(|src| {
            format!(
                r#"<h2>Video</h2><iframe src="{}" title="{title}" width="100%" height="480" frameborder="0" allowfullscreen></iframe>"#,
                html_escape(&src)
            )
        })
        .unwrap_or_default();

    let highlights = if project.highlights.is_empty() {
        String::new()
    } else {
        let items: String = project
            .highlights
            .iter()
            .map(|h| format!("<li>{}</li>", html_escape(h)))
            .collect();
        format!("<h2>Key Highlights</h2><ul>{items}</ul>")
    };

    let technologies: String = project
        .technologies
        .iter()
        .map(|t| format!(r#"<span class="badge">{}</span>"#, html_escape(t)))
        .collect();

    format!(
        r##"<nav class="site-nav scrolled"><a href="/#projects">← Back to Projects</a></nav>
<main>
<section>
  <img src="{cover}" alt="{title}" style="width:100%;max-height:480px;object-fit:cover;border-radius:1rem">
  <h1>{title}</h1>
  <p>{short}</p>
  <div>{links}</div>
  <h2>Overview</h2>
  <p>{full}</p>
  <h2>Technologies</h2>
  <div>{technologies}</div>
  {highlights}
  {gallery}
  {video}
</section>
</main>"##,
        cover = html_escape(cover_image(project)),
        short = html_escape(&project.short_description),
        links = link_buttons(project),
        full = html_escape(&project.full_description),
    )
}

pub fn render_not_found() -> String {
    r#"<main>
<section style="text-align:center">
  <h1>Project Not Found</h1>
  <p>The project you're looking for doesn't exist.</p>
  <a href="/">Back to Home</a>
</section>
</main>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "p".to_string(),
            title: "Pipeline".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn cover_prefers_cover_image_then_first_image_then_fallback() {
        let mut p = project();
        assert_eq!(cover_image(&p), FALLBACK_COVER_IMAGE);

        p.images = vec!["/a.png".to_string(), "/b.png".to_string()];
        assert_eq!(cover_image(&p), "/a.png");

        p.cover_image = Some("/cover.png".to_string());
        assert_eq!(cover_image(&p), "/cover.png");
    }

    #[test]
    fn youtube_watch_links_become_embeds() {
        assert_eq!(
            video_embed_url(Some("https://www.youtube.com/watch?v=abc123")),
            Some("https://www.youtube.com/embed/abc123".to_string())
        );
        assert_eq!(video_embed_url(Some("https://vimeo.com/1")), None);
        assert_eq!(video_embed_url(None), None);
    }

    #[test]
    fn gallery_needs_more_than_one_image() {
        let mut p = project();
        p.images = vec!["/only.png".to_string()];
        assert!(!render_project_detail(&p).contains("Gallery"));

        p.images.push("/second.png".to_string());
        assert!(render_project_detail(&p).contains("Gallery"));
    }

    #[test]
    fn stub_github_link_is_hidden() {
        let mut p = project();
        p.github_url = Some("#".to_string());
        p.live_url = Some("https://demo.example".to_string());

        let html = render_project_detail(&p);

        assert!(!html.contains("View Code"));
        assert!(html.contains("Live Demo"));
    }

    #[test]
    fn highlights_only_when_present() {
        let mut p = project();
        assert!(!render_project_detail(&p).contains("Key Highlights"));

        p.highlights = vec!["Cut cost by half".to_string()];
        assert!(render_project_detail(&p).contains("Key Highlights"));
    }

    #[test]
    fn not_found_links_home() {
        let html = render_not_found();

        assert!(html.contains("Project Not Found"));
        assert!(html.contains(r#"href="/""#));
    }
}
