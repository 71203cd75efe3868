//! Collection loading from `content/<collection>/`.

use std::fs;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use super::{Collection, ContentError, Entry, EntryMeta};
use crate::markdown::extract_frontmatter;

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdx"];

/// Load every markdown file of `collection`, in sorted path order.
///
/// A missing collection directory yields an empty list.
pub fn load_collection(content_dir: &Path, collection: Collection) -> Result<Vec<Entry>, ContentError> {
    let dir = content_dir.join(collection.as_str());
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    collect_markdown_files(&dir)
        .into_iter()
        .map(|path| load_entry(&dir, &path, collection))
        .collect()
}

/// Collect markdown files below `dir`, sorted.
fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
        })
        .collect()
}

/// Parse a single content file.
pub fn load_entry(dir: &Path, path: &Path, collection: Collection) -> Result<Entry, ContentError> {
    let content = fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;

    let (frontmatter, body) = extract_frontmatter(&content)
        .map_err(|err| ContentError::schema(path, err.to_string()))?
        .ok_or_else(|| ContentError::MissingFrontmatter(path.to_path_buf()))?;

    let meta: EntryMeta = serde_json::from_value(serde_json::Value::Object(frontmatter))
        .map_err(|err| ContentError::schema(path, err.to_string()))?;

    if collection == Collection::Blog && meta.description.is_none() {
        return Err(ContentError::schema(path, "missing field `description`"));
    }

    Ok(Entry {
        slug: slug_for(dir, path),
        collection,
        meta,
        body: body.to_string(),
        source: path.to_path_buf(),
    })
}

/// `blog/hello.md` → `hello`, `blog/hello/index.md` → `hello`,
/// `blog/2024/recap.md` → `2024/recap`.
fn slug_for(dir: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(dir).unwrap_or(path).with_extension("");
    let mut parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.len() > 1 && parts.last().is_some_and(|p| p == "index") {
        parts.pop();
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Status;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    const POST: &str = "---\ntitle: Hello\ndescription: First\npubDate: 2024-01-02\n---\n\n# Hi\n";

    #[test]
    fn test_load_sorted_with_slugs() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path();
        write(content, "blog/b.md", POST);
        write(content, "blog/a/index.md", POST);
        write(content, "blog/2024/recap.markdown", POST);
        write(content, "blog/notes.txt", "ignored");

        let entries = load_collection(content, Collection::Blog).unwrap();
        let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["2024/recap", "a", "b"]);
        assert_eq!(entries[0].body, "# Hi\n");
        assert_eq!(entries[0].collection, Collection::Blog);
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(load_collection(tmp.path(), Collection::Talks).unwrap().is_empty());
    }

    #[test]
    fn test_toml_frontmatter_and_status() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "generative/flow.md",
            "+++\ntitle = \"Flow\"\npubDate = 2023-03-04\nstatus = \"draft\"\n+++\nbody",
        );
        let entries = load_collection(tmp.path(), Collection::Generative).unwrap();
        assert_eq!(entries[0].meta.status, Some(Status::Draft));
        assert_eq!(entries[0].body, "body");
    }

    #[test]
    fn test_blog_requires_description() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "blog/x.md", "---\ntitle: X\npubDate: 2024-01-02\n---\n");
        let err = load_collection(tmp.path(), Collection::Blog).unwrap_err();
        assert!(err.to_string().contains("description"));
        assert!(err.to_string().contains("x.md"));
    }

    #[test]
    fn test_missing_frontmatter_is_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "talks/t.md", "# no frontmatter");
        let err = load_collection(tmp.path(), Collection::Talks).unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontmatter(_)));
    }

    #[test]
    fn test_nested_frontmatter_fields() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "generative/flow.md",
            "---\n\
             title: Flow\n\
             pubDate: 2023-03-04\n\
             updatedDate:\n\
             url: https://flow.dev\n\
             imgCredits:\n  username: alice\n  url: https://unsplash.com/@alice\n\
             fork:\n  - title: orig\n    url: https://x.dev\n  - title: remix\n    url: https://y.dev\n\
             ---\nbody",
        );
        let entries = load_collection(tmp.path(), Collection::Generative).unwrap();
        let meta = &entries[0].meta;

        assert_eq!(meta.url.as_deref(), Some("https://flow.dev"));
        assert!(meta.updated_date.is_none());
        let credits = meta.img_credits.as_ref().unwrap();
        assert_eq!(credits.username.as_deref(), Some("alice"));
        assert_eq!(credits.url.as_deref(), Some("https://unsplash.com/@alice"));
        let forks: Vec<_> = meta.fork.iter().map(|f| (f.title.as_str(), f.url.as_str())).collect();
        assert_eq!(forks, vec![("orig", "https://x.dev"), ("remix", "https://y.dev")]);
    }

    #[test]
    fn test_invalid_date_reported() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "talks/t.md", "---\ntitle: T\ndate: someday\n---\n");
        let err = load_collection(tmp.path(), Collection::Talks).unwrap_err();
        assert!(err.to_string().contains("invalid date `someday`"));
    }
}
