use super::entities::CvFile;

/// Flags `id` as the active CV and clears every other flag.
/// Returns false when no file has that id; the set is left untouched.
pub fn activate(files: &mut [CvFile], id: &str) -> bool {
    if !files.iter().any(|cv| cv.id == id) {
        return false;
    }
    for cv in files.iter_mut() {
        cv.is_active = cv.id == id;
    }
    true
}

/// Removes the file with `id`. When no active file remains afterwards the
/// first remaining file is promoted.
pub fn remove_and_promote(files: &mut Vec<CvFile>, id: &str) -> bool {
    let before = files.len();
    files.retain(|cv| cv.id != id);
    if files.len() == before {
        return false;
    }
    promote_first_if_none_active(files);
    true
}

pub fn promote_first_if_none_active(files: &mut [CvFile]) {
    if files.iter().any(|cv| cv.is_active) {
        return;
    }
    if let Some(first) = files.first_mut() {
        first.is_active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cv(id: &str, active: bool) -> CvFile {
        CvFile {
            id: id.to_string(),
            name: format!("{id}.pdf"),
            label: id.to_uppercase(),
            url: format!("/{id}.pdf"),
            is_active: active,
        }
    }

    fn active_ids(files: &[CvFile]) -> Vec<&str> {
        files
            .iter()
            .filter(|cv| cv.is_active)
            .map(|cv| cv.id.as_str())
            .collect()
    }

    #[test]
    fn activate_clears_other_flags() {
        let mut files = vec![cv("a", true), cv("b", false), cv("c", false)];

        assert!(activate(&mut files, "b"));
        assert_eq!(active_ids(&files), vec!["b"]);
    }

    #[test]
    fn activate_unknown_id_is_a_no_op() {
        let mut files = vec![cv("a", true), cv("b", false)];

        assert!(!activate(&mut files, "zzz"));
        assert_eq!(active_ids(&files), vec!["a"]);
    }

    #[test]
    fn removing_active_promotes_first_remaining() {
        let mut files = vec![cv("a", false), cv("b", true), cv("c", false)];

        assert!(remove_and_promote(&mut files, "b"));
        assert_eq!(files.len(), 2);
        assert_eq!(active_ids(&files), vec!["a"]);
    }

    #[test]
    fn removing_inactive_keeps_current_active() {
        let mut files = vec![cv("a", true), cv("b", false)];

        assert!(remove_and_promote(&mut files, "b"));
        assert_eq!(active_ids(&files), vec!["a"]);
    }

    #[test]
    fn removing_last_file_leaves_empty_set() {
        let mut files = vec![cv("a", true)];

        assert!(remove_and_promote(&mut files, "a"));
        assert!(files.is_empty());
    }
}
