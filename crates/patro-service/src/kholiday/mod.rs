//! Holiday-definition ("kholiday") file generation from yearly artifact
//! files. Offline companion to the lookup service; never touches the
//! database.

pub mod nepali;

use anyhow::Context;

use patro_core::types::DateTriple;
use patro_db::db::seed::artifact::{Artifact, parse_slash_date};

/// Prefix attached to holiday lines when the label option is set.
pub const HOLIDAY_LABEL: &str = "सार्बजनिक बिदा: ";
/// Prefix attached to panchangam lines when the label option is set.
pub const PANCHANGAM_LABEL: &str = "पञ्चाङ्ग:";

/// Entry categories selectable for the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Holidays,
    NepaliDate,
    Panchangam,
    Tithi,
    NonHolidayEvents,
}

impl EntryKind {
    pub const ALL: [Self; 5] = [
        Self::Holidays,
        Self::NepaliDate,
        Self::Panchangam,
        Self::Tithi,
        Self::NonHolidayEvents,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Holidays => "holidays",
            Self::NepaliDate => "nepali_date",
            Self::Panchangam => "panchangam",
            Self::Tithi => "tithi",
            Self::NonHolidayEvents => "non_holiday_events",
        }
    }

    /// ## Summary
    /// Parses a comma-separated selection list, e.g.
    /// `"holidays,tithi,nepali_date"`.
    ///
    /// ## Errors
    /// Returns an error naming the first unknown entry kind.
    pub fn parse_list(csv: &str) -> anyhow::Result<Vec<Self>> {
        csv.split(',')
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| {
                Self::ALL
                    .into_iter()
                    .find(|kind| kind.as_str() == chunk)
                    .with_context(|| format!("unknown event type \"{chunk}\""))
            })
            .collect()
    }
}

/// Generation knobs, mirroring the converter's command line.
#[derive(Debug, Clone)]
pub struct KholidayOptions {
    pub kinds: Vec<EntryKind>,
    /// Prepend [`HOLIDAY_LABEL`] to public-holiday lines.
    pub append_holiday_label: bool,
    /// Prepend [`PANCHANGAM_LABEL`] to panchangam lines.
    pub append_panchangam_label: bool,
    /// Merge all of a day's holiday events into a single line.
    pub flatten_holidays: bool,
}

/// Output file name for a kind selection, e.g.
/// `holiday_np_np@holidays_tithi`.
#[must_use]
pub fn output_file_name(kinds: &[EntryKind]) -> String {
    let joined = kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join("_");
    format!("holiday_np_np@{joined}")
}

fn header(kinds_csv: &str, updated: DateTriple) -> String {
    format!(
        "::\n\
         :: Country:  Nepal\n\
         ::\n\
         :: Language: Nepali\n\
         ::\n\
         :: Updated:  {}-{}-{}\n\
         ::\n\
         :: Metadata\n\
         country     \"NP\"\n\
         language    \"np\"\n\
         name        \"National events for Nepal\"\n\
         description \"National events file for Nepal includes {kinds_csv}\"",
        updated.year, updated.month, updated.day
    )
}

/// ## Summary
/// Renders the whole holiday-definition file: metadata header followed by
/// the five fixed sections (emitted even when empty), one line per selected
/// entry per day.
///
/// ## Errors
/// Returns an error for malformed artifact dates or out-of-range months.
pub fn generate(
    artifact: &Artifact,
    options: &KholidayOptions,
    updated: DateTriple,
) -> anyhow::Result<String> {
    let mut sections: [(&str, Vec<String>); 5] = [
        (":: Public Holidays", Vec::new()),
        (":: Civil", Vec::new()),
        (":: Bikram Sambat Dates", Vec::new()),
        (":: Nepali Tithis", Vec::new()),
        (":: Panchangam", Vec::new()),
    ];

    for (ad_text, entry) in artifact {
        let ad = parse_slash_date(ad_text)?;
        let on = format!("on {} {} {}", nepali::en_month_name(ad.month)?, ad.day, ad.year);

        if options.kinds.contains(&EntryKind::Holidays) && entry.is_public_holiday {
            let label = if options.append_holiday_label {
                HOLIDAY_LABEL
            } else {
                ""
            };
            if options.flatten_holidays {
                let flat = entry.events.join("/");
                sections[0].1.push(format!("\"{label}{flat}\" public {on}"));
            } else {
                for event in &entry.events {
                    sections[0].1.push(format!("\"{label}{event}\" public {on}"));
                }
            }
        }

        if options.kinds.contains(&EntryKind::NonHolidayEvents) && !entry.is_public_holiday {
            for event in &entry.events {
                sections[1].1.push(format!("\"{event}\" civil {on}"));
            }
        }

        if options.kinds.contains(&EntryKind::NepaliDate) {
            let bs = parse_slash_date(&entry.nepali_date)?;
            let display = nepali::bs_date_display(bs)?;
            sections[2].1.push(format!("\"{display}\" nameday {on}"));
        }

        if options.kinds.contains(&EntryKind::Tithi) && !entry.tithi.trim().is_empty() {
            sections[3]
                .1
                .push(format!("\"{}\" nameday {on}", entry.tithi));
        }

        if options.kinds.contains(&EntryKind::Panchangam) {
            let label = if options.append_panchangam_label {
                PANCHANGAM_LABEL
            } else {
                ""
            };
            for event in &entry.panchangam {
                sections[4].1.push(format!("\"{label}{event}\" nameday {on}"));
            }
        }
    }

    let kinds_csv = options
        .kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut out = header(&kinds_csv, updated);
    for (title, lines) in sections {
        out.push_str("\n\n");
        out.push_str(title);
        for line in lines {
            out.push('\n');
            out.push_str(&line);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use patro_db::db::seed::artifact::ArtifactDay;

    fn artifact_with(entries: Vec<(&str, ArtifactDay)>) -> Artifact {
        entries
            .into_iter()
            .map(|(date, day)| (date.to_owned(), day))
            .collect()
    }

    fn holiday_day() -> ArtifactDay {
        ArtifactDay {
            nepali_date: "2080/6/23".to_owned(),
            is_public_holiday: true,
            tithi: "दशमी".to_owned(),
            events: vec!["विजया दशमी".to_owned(), "टीका".to_owned()],
            panchangam: vec!["साइत".to_owned()],
        }
    }

    #[test]
    fn parse_list_accepts_known_kinds() {
        let kinds = EntryKind::parse_list("holidays,tithi").unwrap();
        assert_eq!(kinds, vec![EntryKind::Holidays, EntryKind::Tithi]);
        assert!(EntryKind::parse_list("holidays,birthdays").is_err());
    }

    #[test]
    fn file_name_joins_kinds_with_underscores() {
        assert_eq!(
            output_file_name(&[EntryKind::Holidays, EntryKind::NepaliDate]),
            "holiday_np_np@holidays_nepali_date"
        );
    }

    #[test]
    fn holiday_lines_one_per_event_by_default() {
        let artifact = artifact_with(vec![("2023/10/24", holiday_day())]);
        let options = KholidayOptions {
            kinds: vec![EntryKind::Holidays],
            append_holiday_label: false,
            append_panchangam_label: false,
            flatten_holidays: false,
        };
        let out = generate(&artifact, &options, DateTriple::new(2026, 8, 6)).unwrap();
        assert!(out.contains("\"विजया दशमी\" public on october 24 2023"));
        assert!(out.contains("\"टीका\" public on october 24 2023"));
    }

    #[test]
    fn flattened_holidays_merge_into_one_line() {
        let artifact = artifact_with(vec![("2023/10/24", holiday_day())]);
        let options = KholidayOptions {
            kinds: vec![EntryKind::Holidays],
            append_holiday_label: true,
            append_panchangam_label: false,
            flatten_holidays: true,
        };
        let out = generate(&artifact, &options, DateTriple::new(2026, 8, 6)).unwrap();
        assert!(out.contains(&format!(
            "\"{HOLIDAY_LABEL}विजया दशमी/टीका\" public on october 24 2023"
        )));
    }

    #[test]
    fn non_holiday_events_render_as_civil() {
        let mut day = holiday_day();
        day.is_public_holiday = false;
        let artifact = artifact_with(vec![("2023/10/24", day)]);
        let options = KholidayOptions {
            kinds: vec![EntryKind::NonHolidayEvents, EntryKind::NepaliDate],
            append_holiday_label: false,
            append_panchangam_label: false,
            flatten_holidays: false,
        };
        let out = generate(&artifact, &options, DateTriple::new(2026, 8, 6)).unwrap();
        assert!(out.contains("\"विजया दशमी\" civil on october 24 2023"));
        assert!(out.contains("\"आश्विन २३, २०८०\" nameday on october 24 2023"));
    }

    #[test]
    fn all_sections_present_even_when_empty() {
        let artifact = Artifact::new();
        let options = KholidayOptions {
            kinds: EntryKind::ALL.to_vec(),
            append_holiday_label: false,
            append_panchangam_label: false,
            flatten_holidays: false,
        };
        let out = generate(&artifact, &options, DateTriple::new(2026, 8, 6)).unwrap();
        for section in [
            ":: Public Holidays",
            ":: Civil",
            ":: Bikram Sambat Dates",
            ":: Nepali Tithis",
            ":: Panchangam",
        ] {
            assert!(out.contains(section));
        }
        assert!(out.contains("description \"National events file for Nepal includes"));
    }
}
