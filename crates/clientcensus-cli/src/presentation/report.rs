//! Plain-text tally report written to stdout.

use clientcensus_engine::{AggregateCounts, Census};
use std::io::{self, Write};

struct Section {
    heading: &'static str,
    subtotal: &'static str,
    none_found: &'static str,
}

const DESKTOP: Section = Section {
    heading: "Mattermost Desktop App Versions Found:",
    subtotal: "Total Active Desktop Clients",
    none_found: "No Mattermost Desktop Apps Found",
};

const MOBILE: Section = Section {
    heading: "Mattermost Mobile App Versions Found:",
    subtotal: "Total Active Mobile Clients",
    none_found: "No Mattermost Mobile Apps Found",
};

pub fn write_report<W: Write>(out: &mut W, census: &Census) -> io::Result<()> {
    if census.is_empty() {
        writeln!(out, "No Mattermost Apps Found")?;
        return Ok(());
    }

    write_section(out, &DESKTOP, &census.desktop)?;
    // "none found" follows the desktop subtotal directly
    if !census.mobile.is_empty() {
        writeln!(out)?;
    }
    write_section(out, &MOBILE, &census.mobile)?;
    writeln!(out)?;
    writeln!(out, "Total Active Clients: {}", census.total())?;

    Ok(())
}

fn write_section<W: Write>(
    out: &mut W,
    section: &Section,
    counts: &AggregateCounts,
) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "{}", section.none_found);
    }

    writeln!(out, "{}", section.heading)?;
    for (version, entries) in counts.iter() {
        for entry in entries {
            writeln!(out, "  {} ({}) - {}", version, entry.os, entry.count)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{}: {}", section.subtotal, counts.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientcensus_engine::Aggregator;
    use clientcensus_types::VersionKey;

    fn render(census: &Census) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, census).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn counts(events: &[(&str, &str)]) -> AggregateCounts {
        let mut agg = Aggregator::new();
        for (version, os) in events {
            agg.record(VersionKey::from(*version), *os);
        }
        agg.finish()
    }

    #[test]
    fn test_full_report() {
        let census = Census {
            desktop: counts(&[("5.5.0", "Windows"), ("5.5.0", "Windows")]),
            mobile: counts(&[("5.5.3", "Mac OS")]),
            skipped: 0,
        };

        let expected = "\
Mattermost Desktop App Versions Found:
  5.5.0 (Windows) - 2

Total Active Desktop Clients: 2

Mattermost Mobile App Versions Found:
  5.5.3 (Mac OS) - 1

Total Active Mobile Clients: 1

Total Active Clients: 3
";
        assert_eq!(render(&census), expected);
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(render(&Census::default()), "No Mattermost Apps Found\n");
    }

    #[test]
    fn test_desktop_empty() {
        let census = Census {
            desktop: AggregateCounts::default(),
            mobile: counts(&[("1.14.0", "Android"), ("1.13.1", "iOS")]),
            skipped: 0,
        };

        let expected = "\
No Mattermost Desktop Apps Found

Mattermost Mobile App Versions Found:
  1.13.1 (iOS) - 1
  1.14.0 (Android) - 1

Total Active Mobile Clients: 2

Total Active Clients: 2
";
        assert_eq!(render(&census), expected);
    }

    #[test]
    fn test_mobile_empty_lists_every_os() {
        let census = Census {
            desktop: counts(&[
                ("4.2.0", "Windows"),
                ("4.2.0", "Linux"),
                ("4.2.0", "Windows"),
            ]),
            mobile: AggregateCounts::default(),
            skipped: 0,
        };

        let out = render(&census);
        assert!(out.contains("  4.2.0 (Linux) - 1\n  4.2.0 (Windows) - 2\n"));
        assert!(out.contains("No Mattermost Mobile Apps Found\n"));
        assert!(out.ends_with("Total Active Clients: 3\n"));
    }

    #[test]
    fn test_mobile_none_found_follows_desktop_subtotal() {
        let census = Census {
            desktop: counts(&[("4.2.0", "Windows")]),
            mobile: AggregateCounts::default(),
            skipped: 0,
        };

        let expected = "\
Mattermost Desktop App Versions Found:
  4.2.0 (Windows) - 1

Total Active Desktop Clients: 1
No Mattermost Mobile Apps Found

Total Active Clients: 1
";
        assert_eq!(render(&census), expected);
    }
}
