// Trait for per-line cleaning of a dependency list
pub trait LineCleaner: Send + Sync {
    fn clean(&self, line: &str) -> String;
}

/// Strips any run of leading `-` and ` ` characters, then trims the rest.
///
/// This is a character-set strip: `"- - -x"` and `"---   x"` both become `"x"`.
/// A tab stops the leading strip, but the final trim removes it, so
/// `"\t- x"` becomes `"- x"`.
///
/// The trim also drops the ASCII separators `\x1c`..=`\x1f`, which
/// `char::is_whitespace` leaves alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulletCleaner;

impl LineCleaner for BulletCleaner {
    fn clean(&self, line: &str) -> String {
        trim_line(line.trim_start_matches(['-', ' '])).to_string()
    }
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(is_strippable)
}

/// Removes one literal prefix (after leading whitespace), then trims.
#[derive(Debug, Clone)]
pub struct PrefixCleaner {
    prefix: String,
}

impl PrefixCleaner {
    pub fn new(prefix: impl Into<String>) -> Self {
        PrefixCleaner {
            prefix: prefix.into(),
        }
    }
}

impl Default for PrefixCleaner {
    fn default() -> Self {
        PrefixCleaner::new("- ")
    }
}

impl LineCleaner for PrefixCleaner {
    fn clean(&self, line: &str) -> String {
        let line = line.trim_start_matches(is_strippable);
        trim_line(line.strip_prefix(self.prefix.as_str()).unwrap_or(line)).to_string()
    }
}
