//! Page rendering: Markdown plus an HTML template produce a finished page.

use std::fs;
use std::path::Path;

use log::info;

use crate::convert::convert_document;
use crate::options::ConvertOptions;
use crate::title::extract_title;
use crate::{Result, SitegenError};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Substitute the title and content placeholders in `template`
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Convert `markdown` and fill `template` with its title and HTML.
///
/// Fails with [`SitegenError::MissingTitle`] when the document has no `# `
/// heading line.
pub fn render_page(markdown: &str, template: &str, options: &ConvertOptions) -> Result<String> {
    let content = convert_document(markdown, options)?.render();
    let title = extract_title(markdown).ok_or(SitegenError::MissingTitle)?;
    Ok(fill_template(template, &title, &content))
}

/// Read a Markdown page and a template from disk and write the rendered page
/// to `dest_path`, creating parent directories as needed
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    options: &ConvertOptions,
) -> Result<()> {
    info!(
        "Generating page from {} to {} using {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = read_to_string(from_path)?;
    let template = read_to_string(template_path)?;
    let page = render_page(&markdown, &template, options)?;

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(|source| SitegenError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(dest_path, page).map_err(|source| SitegenError::Io {
        path: dest_path.to_path_buf(),
        source,
    })
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SitegenError::Io {
        path: path.to_path_buf(),
        source,
    })
}
