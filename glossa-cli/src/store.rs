//! Reference profile persistence.
//!
//! Profiles live in a directory, one file per language. The filename stem
//! is the language code and the extension is `.profile`; each line holds
//! `trigram,count` with raw (unnormalized) counts. Files store raw counts
//! so the stored artifacts stay independent of the normalization formula;
//! loading is the single place profiles are normalized.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use glossa_core::{LanguageProfile, LanguageProfiles, TrigramProfile};

/// Extension of reference profile files.
pub const PROFILE_EXTENSION: &str = "profile";

/// Loads every reference profile from a directory.
///
/// Files are read in lexicographic filename order, which fixes the
/// tie-break order of the identifier. Each profile is normalized after
/// parsing; a file whose counts sum to zero fails the load, as do
/// malformed lines.
pub fn load_profiles(dir: &Path) -> Result<LanguageProfiles> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("reading profile directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == PROFILE_EXTENSION))
        .collect();
    paths.sort();

    if paths.is_empty() {
        bail!("no .{} files in {}", PROFILE_EXTENSION, dir.display());
    }

    let mut languages = LanguageProfiles::with_capacity(paths.len());
    for path in paths {
        let code = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("profile filename {} is not UTF-8", path.display()))?
            .to_owned();

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading profile {}", path.display()))?;
        let mut profile = parse_profile(&contents)
            .with_context(|| format!("parsing profile {}", path.display()))?;
        profile
            .normalize()
            .with_context(|| format!("normalizing profile {}", path.display()))?;

        log::debug!("loaded profile {} ({} trigrams)", code, profile.len());
        languages.push(LanguageProfile::new(code, profile));
    }

    log::info!("loaded {} language profiles from {}", languages.len(), dir.display());
    Ok(languages)
}

/// Parses `trigram,count` lines into a raw-count profile.
///
/// A trigram may itself contain commas, so the split runs on the LAST
/// comma of the line. Blank lines are ignored.
fn parse_profile(contents: &str) -> Result<TrigramProfile> {
    let mut profile = TrigramProfile::new();

    for (idx, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let (trigram, count) = line
            .rsplit_once(',')
            .with_context(|| format!("line {}: expected 'trigram,count'", idx + 1))?;
        let count: f32 = count
            .trim()
            .parse()
            .with_context(|| format!("line {}: invalid count {count:?}", idx + 1))?;
        profile.insert(trigram, count);
    }

    Ok(profile)
}

/// Writes a raw-count profile to a file.
///
/// Entries are sorted by descending count, then by trigram, so repeated
/// builds of the same corpus produce byte-identical files.
pub fn save_profile(path: &Path, profile: &TrigramProfile) -> Result<()> {
    let mut entries: Vec<(&str, f32)> = profile.iter().collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out = String::with_capacity(entries.len() * 8);
    for (trigram, count) in entries {
        out.push_str(trigram);
        out.push(',');
        out.push_str(&format!("{count}"));
        out.push('\n');
    }

    fs::write(path, out).with_context(|| format!("writing profile {}", path.display()))?;
    log::info!("wrote profile {} ({} trigrams)", path.display(), profile.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::profile::build_trigram_profile;
    use glossa_types::Text;
    use tempfile::tempdir;

    fn corpus_profile(line: &str) -> TrigramProfile {
        build_trigram_profile(&Text::from_lines(vec![line.to_string()]))
    }

    #[test]
    fn save_then_load_round_trips_counts() {
        let dir = tempdir().unwrap();
        let raw = corpus_profile("the cat sat on the mat");
        save_profile(&dir.path().join("en.profile"), &raw).unwrap();

        let languages = load_profiles(dir.path()).unwrap();
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].code(), "en");

        // Loaded weights are the saved counts divided by sqrt of their sum.
        let scale = raw.total_weight().sqrt();
        for (trigram, count) in raw.iter() {
            let loaded = languages[0].profile().weight(trigram);
            assert!((loaded * scale - count).abs() < 1e-5);
        }
    }

    #[test]
    fn comma_trigrams_round_trip() {
        let dir = tempdir().unwrap();
        let mut raw = TrigramProfile::new();
        raw.insert(",,,", 3.0);
        raw.insert("a,b", 2.0);
        raw.insert(", c", 1.0);
        save_profile(&dir.path().join("xx.profile"), &raw).unwrap();

        let languages = load_profiles(dir.path()).unwrap();
        let profile = languages[0].profile();
        assert_eq!(profile.len(), 3);
        assert!(profile.weight(",,,") > 0.0);
        assert!(profile.weight("a,b") > 0.0);
        assert!(profile.weight(", c") > 0.0);
    }

    #[test]
    fn load_order_is_lexicographic() {
        let dir = tempdir().unwrap();
        for code in ["fr", "de", "en"] {
            save_profile(
                &dir.path().join(format!("{code}.profile")),
                &corpus_profile("shared corpus"),
            )
            .unwrap();
        }

        let languages = load_profiles(dir.path()).unwrap();
        let codes: Vec<_> = languages.iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["de", "en", "fr"]);
    }

    #[test]
    fn non_profile_files_ignored() {
        let dir = tempdir().unwrap();
        save_profile(&dir.path().join("en.profile"), &corpus_profile("hello world")).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a profile").unwrap();

        let languages = load_profiles(dir.path()).unwrap();
        assert_eq!(languages.len(), 1);
    }

    #[test]
    fn empty_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(load_profiles(dir.path()).is_err());
    }

    #[test]
    fn malformed_line_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("xx.profile"), "no-comma-here\n").unwrap();
        assert!(load_profiles(dir.path()).is_err());
    }

    #[test]
    fn bad_count_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("xx.profile"), "abc,many\n").unwrap();
        assert!(load_profiles(dir.path()).is_err());
    }

    #[test]
    fn zero_weight_profile_fails_normalization() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("xx.profile"), "abc,0\n").unwrap();
        assert!(load_profiles(dir.path()).is_err());
    }

    #[test]
    fn saved_file_is_deterministic() {
        let dir = tempdir().unwrap();
        let raw = corpus_profile("deterministic output please");

        let a = dir.path().join("a.profile");
        let b = dir.path().join("b.profile");
        save_profile(&a, &raw).unwrap();
        save_profile(&b, &raw).unwrap();

        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn blank_lines_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("xx.profile"), "abc,2\n\ndef,1\n").unwrap();
        let languages = load_profiles(dir.path()).unwrap();
        assert_eq!(languages[0].profile().len(), 2);
    }
}
