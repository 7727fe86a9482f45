use crate::models::ChangeEntry;

/// Parse `git diff --numstat` output into one [`ChangeEntry`] per file.
///
/// Each line is `additions<TAB>deletions<TAB>path`. Binary files report `-` for both
/// counts and are recorded as zero/zero so the file is still represented.
pub fn parse_numstat(output: &str) -> Vec<ChangeEntry> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.trim_end_matches('\r').splitn(3, '\t');
            let additions = parts.next()?;
            let deletions = parts.next()?;
            let path = parts.next()?;
            if path.is_empty() {
                return None;
            }
            Some(ChangeEntry::new(parse_count(additions), parse_count(deletions)))
        })
        .collect()
}

fn parse_count(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numstat_lines() {
        let output = "3\t1\tsrc/lib.rs\n5\t2\tsrc/main.rs\n";
        let entries = parse_numstat(output);

        assert_eq!(entries, vec![ChangeEntry::new(3, 1), ChangeEntry::new(5, 2)]);
    }

    #[test]
    fn test_parse_numstat_binary_file() {
        let entries = parse_numstat("10\t2\tfoo.rs\n-\t-\tbin.dat\n");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], ChangeEntry::new(0, 0));
    }

    #[test]
    fn test_parse_numstat_rename_path_with_tabs_kept_whole() {
        let entries = parse_numstat("1\t1\told name.rs => new\tname.rs\n");
        assert_eq!(entries, vec![ChangeEntry::new(1, 1)]);
    }

    #[test]
    fn test_parse_numstat_ignores_lines_without_path() {
        let entries = parse_numstat("\n7\t3\n4\t4\t\nwarning: something\n2\t0\tREADME.md\n");
        assert_eq!(entries, vec![ChangeEntry::new(2, 0)]);
    }

    #[test]
    fn test_parse_numstat_empty_output() {
        assert!(parse_numstat("").is_empty());
    }
}
