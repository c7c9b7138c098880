//! Related-file summary for the success block.
//!
//! Files are grouped by their type tag. Groups appear in the order their tag
//! is first seen and files keep their original order inside a group. Each
//! group is rendered through the file-details fragment with three values:
//!
//! - `{fileType}` - the type label ("to modify", "reference", ...)
//! - `{fileCount}` - number of files in the group
//! - `{filesList}` - the paths as inline code, joined with `", "`

use super::template::{render_template, vars};
use crate::task::{RelatedFile, RelatedFileType};

/// Files sharing one type tag, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup<'a> {
    pub file_type: RelatedFileType,
    pub paths: Vec<&'a str>,
}

impl FileGroup<'_> {
    /// Paths wrapped in backticks and comma-joined.
    pub fn files_list(&self) -> String {
        self.paths
            .iter()
            .map(|path| format!("`{}`", path))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Partition files by type tag in a single pass, preserving first-seen order.
pub fn group_related_files(files: &[RelatedFile]) -> Vec<FileGroup<'_>> {
    let mut groups: Vec<FileGroup<'_>> = Vec::new();

    for file in files {
        match groups.iter_mut().find(|g| g.file_type == file.file_type) {
            Some(group) => group.paths.push(&file.path),
            None => groups.push(FileGroup {
                file_type: file.file_type,
                paths: vec![&file.path],
            }),
        }
    }

    groups
}

/// Render one file-details fragment per group and concatenate them.
///
/// Returns an empty string when there are no files.
pub fn summarize_related_files(files: &[RelatedFile], fragment: &str) -> String {
    group_related_files(files)
        .iter()
        .map(|group| {
            let vars = vars([
                ("fileType", group.file_type.label().to_string()),
                ("fileCount", group.paths.len().to_string()),
                ("filesList", group.files_list()),
            ]);
            render_template(fragment, &vars)
        })
        .collect()
}
