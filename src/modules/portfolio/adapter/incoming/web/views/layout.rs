use serde_json::json;

use super::escape::html_escape;
use crate::modules::portfolio::application::editor::AdminSection;
use crate::modules::portfolio::application::services::AdminState;
use crate::modules::portfolio::application::shortcut::KeyChord;
use crate::modules::portfolio::application::viewport::{PageViewport, ViewportState};

const STYLES: &str = r#"
:root { --bg: #0b1120; --panel: #111827; --text: #e5e7eb; --muted: #9ca3af; --accent: #3b82f6; }
* { box-sizing: border-box; }
body { margin: 0; font-family: Inter, system-ui, sans-serif; background: var(--bg); color: var(--text); }
a { color: inherit; }
nav.site-nav { position: fixed; top: 0; left: 0; right: 0; display: flex; gap: 1rem; align-items: center; padding: 1.25rem 2rem; z-index: 10; transition: all .3s; }
nav.site-nav.scrolled { background: rgba(17, 24, 39, .95); padding: .75rem 2rem; box-shadow: 0 2px 12px rgba(0,0,0,.4); }
nav.site-nav a { text-decoration: none; color: var(--muted); }
nav.site-nav a.active { color: var(--text); font-weight: 600; }
nav.site-nav .cv-link { margin-left: auto; padding: .4rem .9rem; border-radius: .5rem; background: var(--accent); color: #fff; }
section { padding: 6rem 2rem 4rem; max-width: 1100px; margin: 0 auto; }
[data-reveal-amount] { opacity: 0; transform: translateY(30px); transition: opacity .6s, transform .6s; }
[data-reveal-amount].in-view { opacity: 1; transform: none; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.card { background: var(--panel); border-radius: 1rem; padding: 1.5rem; }
.badge { display: inline-block; padding: .2rem .6rem; margin: .15rem; border-radius: 999px; background: #1f2937; font-size: .8rem; }
.icon { display: inline-flex; width: 3rem; height: 3rem; align-items: center; justify-content: center; border-radius: .75rem; font-size: 1.4rem; }
.admin-overlay { position: fixed; inset: 0; background: rgba(0,0,0,.7); z-index: 50; display: flex; }
.admin-panel { margin: auto; width: min(960px, 95vw); max-height: 90vh; overflow: auto; background: var(--panel); border-radius: 1rem; padding: 1.5rem; }
.admin-panel .tabs button.active { background: var(--accent); color: #fff; }
footer { text-align: center; padding: 2rem; color: var(--muted); }
"#;

// Placeholders are substituted before the script is embedded.
const PAGE_SCRIPT: &str = r#"
(function () {
  var chord = __CHORD__;
  var view = __VIEWPORT__ || { sections: [] };

  document.addEventListener('keydown', function (e) {
    if (e.ctrlKey !== chord.ctrl || e.shiftKey !== chord.shift ||
        e.altKey !== chord.alt || e.metaKey !== chord.meta ||
        e.key.toLowerCase() !== chord.key.toLowerCase()) {
      return;
    }
    e.preventDefault();
    fetch('/api/admin/keypress', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ key: e.key, ctrlKey: e.ctrlKey, shiftKey: e.shiftKey, altKey: e.altKey, metaKey: e.metaKey })
    }).then(function () { window.location.reload(); });
  });

  // Same rule as VisibilityTracker::observe, seeded with the rendered state.
  view.sections.forEach(function (section) {
    var el = document.getElementById(section.id);
    if (!el) { return; }
    var inView = section.inView;
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (section.once && inView) { return; }
        var ratio = entry.isIntersecting ? entry.intersectionRatio : 0;
        inView = ratio > 0 && ratio >= section.amount;
        el.classList.toggle('in-view', inView);
        if (section.once && inView) { observer.disconnect(); }
      });
    }, { threshold: [0, section.amount, 1] });
    observer.observe(el);
  });

  // Same rule as NavTracker::on_scroll: first straddling section in page order.
  var nav = document.querySelector('nav.site-nav');
  if (nav) {
    var active = view.active;
    window.addEventListener('scroll', function () {
      nav.classList.toggle('scrolled', window.scrollY > view.scrolledThreshold);
      for (var i = 0; i < view.sections.length; i++) {
        var el = document.getElementById(view.sections[i].id);
        if (!el) { continue; }
        var box = el.getBoundingClientRect();
        if (box.top <= view.offset && box.bottom >= view.offset) {
          active = view.sections[i].id;
          break;
        }
      }
      nav.querySelectorAll('a[data-section]').forEach(function (link) {
        link.classList.toggle('active', link.dataset.section === active);
      });
    });
  }

  var form = document.getElementById('contact-form');
  if (form) {
    form.addEventListener('submit', function (e) {
      e.preventDefault();
      var button = form.querySelector('button');
      var status = document.getElementById('contact-status');
      button.disabled = true;
      button.textContent = 'Sending...';
      fetch('/api/contact', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ name: form.name.value, email: form.email.value, message: form.message.value })
      }).then(function (r) { return r.json(); }).then(function (body) {
        if (body.success) {
          status.textContent = body.data.message;
          form.reset();
        } else {
          status.textContent = body.error.message;
        }
      }).finally(function () {
        button.disabled = false;
        button.textContent = 'Send Message';
      });
    });
  }

  var admin = document.getElementById('admin-panel');
  if (admin) {
    var draft = document.getElementById('admin-draft');
    var addButton = document.getElementById('admin-add');
    var saveButton = document.getElementById('admin-save');
    var current = admin.dataset.activeSection || null;

    var showDraft = function (section) {
      fetch('/api/admin/drafts/' + section).then(function (r) { return r.json(); }).then(function (body) {
        draft.textContent = JSON.stringify(body.data.draft, null, 2);
      });
    };

    admin.querySelectorAll('button[data-admin-section]').forEach(function (button) {
      button.addEventListener('click', function () {
        current = button.dataset.adminSection;
        fetch('/api/admin/section', {
          method: 'PUT',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ section: current })
        });
        admin.querySelectorAll('button[data-admin-section]').forEach(function (b) { b.classList.remove('active'); });
        button.classList.add('active');
        addButton.hidden = button.dataset.collection !== 'true';
        saveButton.disabled = false;
        showDraft(current);
      });
    });
    if (current) { showDraft(current); }

    addButton.addEventListener('click', function () {
      if (!current) { return; }
      fetch('/api/admin/drafts/' + current + '/items', { method: 'POST' })
        .then(function () { showDraft(current); });
    });

    saveButton.addEventListener('click', function () {
      if (!current) { return; }
      fetch('/api/admin/drafts/' + current + '/save', { method: 'POST' })
        .then(function () { window.location.reload(); });
    });

    var importFile = document.getElementById('admin-import-file');
    document.getElementById('admin-import').addEventListener('click', function () { importFile.click(); });
    importFile.addEventListener('change', function () {
      var file = importFile.files[0];
      if (!file) { return; }
      var reader = new FileReader();
      reader.onload = function () {
        fetch('/api/admin/import', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: reader.result
        }).then(function (r) { return r.json(); }).then(function (body) {
          if (body.success) {
            alert('Data imported successfully!');
            window.location.reload();
          } else {
            alert('Failed to import data. Please check the file format.');
          }
        });
      };
      reader.readAsText(file);
      importFile.value = '';
    });

    document.getElementById('admin-reset').addEventListener('click', function () {
      if (!confirm('Are you sure you want to reset all data to defaults? This cannot be undone.')) { return; }
      fetch('/api/admin/reset', { method: 'POST' }).then(function () {
        alert('Data reset to defaults!');
        window.location.reload();
      });
    });

    document.getElementById('admin-close').addEventListener('click', function () {
      fetch('/api/admin/toggle', { method: 'POST' }).then(function () { window.location.reload(); });
    });
  }
})();
"#;

fn page_script(chord: &KeyChord, viewport: &ViewportState) -> String {
    let chord = json!({
        "ctrl": chord.ctrl,
        "shift": chord.shift,
        "alt": chord.alt,
        "meta": chord.meta,
        "key": chord.key,
    });
    let viewport = serde_json::to_string(viewport).unwrap_or_else(|_| "null".to_string());
    PAGE_SCRIPT
        .replace("__CHORD__", &chord.to_string())
        .replace("__VIEWPORT__", &viewport)
}

fn admin_overlay(admin: &AdminState) -> String {
    if !admin.is_open {
        return String::new();
    }
    let tabs: String = AdminSection::ALL
        .iter()
        .map(|section| {
            let class = if admin.active_section == Some(*section) {
                " class=\"active\""
            } else {
                ""
            };
            format!(
                r#"<button type="button" data-admin-section="{key}" data-collection="{collection}"{class}>{label}</button>"#,
                key = section.as_str(),
                collection = section.is_collection(),
                label = html_escape(section.label()),
            )
        })
        .collect();

    let active = admin.active_section.map(AdminSection::as_str).unwrap_or_default();
    let add_hidden = if admin.active_section.is_some_and(AdminSection::is_collection) {
        ""
    } else {
        " hidden"
    };
    let save_disabled = if admin.active_section.is_some() {
        ""
    } else {
        " disabled"
    };

    format!(
        r#"<div class="admin-overlay">
  <div class="admin-panel" id="admin-panel" data-active-section="{active}">
    <header>
      <h2>Admin Panel</h2>
      <a href="/api/admin/export" download>Export</a>
      <button type="button" id="admin-import">Import</button>
      <input type="file" id="admin-import-file" accept=".json" hidden>
      <button type="button" id="admin-reset">Reset to Defaults</button>
      <button type="button" id="admin-close">Close</button>
    </header>
    <div class="tabs">{tabs}</div>
    <div class="actions">
      <button type="button" id="admin-add"{add_hidden}>Add item</button>
      <button type="button" id="admin-save"{save_disabled}>Save</button>
    </div>
    <pre id="admin-draft"></pre>
  </div>
</div>"#
    )
}

/// Wraps page content in the document shell with styles and the page script.
pub fn render_page(title: &str, body: &str, chord: &KeyChord, admin: &AdminState) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{STYLES}</style>
</head>
<body>
{body}
{overlay}
<script>{script}</script>
</body>
</html>"#,
        title = html_escape(title),
        overlay = admin_overlay(admin),
        script = page_script(chord, &PageViewport::at_top().state()),
    )
}
