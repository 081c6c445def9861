//! Group folder titles

use tabshelf_tabs::{Group, GroupDirectory, GroupError, GroupId};

/// The group's own title when it has one, else "<fallback_prefix> <id>".
pub fn group_folder_title(group: &Group, fallback_prefix: &str) -> String {
    match group.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => format!("{} {}", fallback_prefix, group.id),
    }
}

pub async fn resolve_group_title(
    groups: &dyn GroupDirectory,
    id: GroupId,
    fallback_prefix: &str,
) -> Result<String, GroupError> {
    if !groups.is_supported() {
        return Err(GroupError::Unavailable);
    }
    let group = groups.get_group(id).await?;
    Ok(group_folder_title(&group, fallback_prefix))
}
