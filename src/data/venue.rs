//! Venue records and the read-only directory that holds them.
//!
//! The directory is either the compiled-in list of Tampa Bay area masjids
//! ([`Directory::builtin`]) or a list loaded once from a venue file
//! ([`Directory::load`]). Either way it is never mutated after construction.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named prayer slot in the daily schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    /// Friday congregational prayer.
    Jumuah,
}

impl Prayer {
    /// All prayers in display order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
        Prayer::Jumuah,
    ];

    /// Returns the display label for this prayer.
    pub fn label(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
            Prayer::Jumuah => "Jumuah",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Iqamah display strings for every prayer slot.
///
/// Values are free text, not machine times: Maghrib is usually "Sunset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledTimes {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    /// Fallback Friday time, used when the venue lists no sermon times.
    pub jumuah: String,
}

impl ScheduledTimes {
    /// Returns the display time for a prayer.
    pub fn get(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
            Prayer::Jumuah => &self.jumuah,
        }
    }
}

/// A masjid or community center and its published schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    /// Short unique key, used for selection.
    pub id: String,
    pub name: String,
    pub address: String,
    pub scheduled_times: ScheduledTimes,
    pub website: String,
    /// Whether extra Friday sittings beyond the first are shown.
    pub has_multiple_sermons: bool,
    /// Friday sittings in order; may be empty.
    pub sermon_times: Vec<String>,
}

/// Errors raised while loading a venue file.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The file could not be read or parsed.
    #[error("failed to load venues from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    /// The file parsed but listed no venues.
    #[error("venue file {0} contains no venues")]
    Empty(PathBuf),

    /// Two venues share the same id.
    #[error("duplicate venue id: {0}")]
    DuplicateId(String),

    /// A venue is missing a time for one of its prayers.
    #[error("venue {venue} has no time for {prayer}")]
    MissingTime { venue: String, prayer: Prayer },
}

/// Ordered, read-only collection of venues.
#[derive(Debug, Clone)]
pub struct Directory {
    venues: Vec<Venue>,
}

impl Directory {
    /// The compiled-in list of Tampa Bay area masjids.
    pub fn builtin() -> Self {
        let venues = vec![
            venue(
                "istaba",
                "Islamic Society of Tampa Bay Area (ISTABA)",
                "7326 E. Sligh Ave, Tampa, FL",
                ["5:45 AM", "1:30 PM", "5:00 PM", "Sunset", "8:30 PM", "12:30 PM"],
                "https://www.istaba.org/",
                true,
                &["12:30 PM", "1:40 PM"],
            ),
            venue(
                "isonet",
                "Islamic Society of New Tampa (ISONET)",
                "15830 Morris Bridge Rd, Tampa, FL",
                ["6:00 AM", "1:35 PM", "4:55 PM", "Sunset", "8:45 PM", "1:30 PM"],
                "https://www.isonet.org/",
                true,
                &["1:30 PM", "2:45 PM"],
            ),
            venue(
                "qassam",
                "Masjid Al-Qassam (ICT)",
                "6406 N 56th St, Tampa, FL",
                ["5:50 AM", "1:25 PM", "5:05 PM", "Sunset", "8:35 PM", "1:40 PM"],
                "https://ictampa.org/",
                false,
                &["1:40 PM"],
            ),
            venue(
                "brndon",
                "Islamic Center of Brandon",
                "1006 Victoria Street. Brandon, FL 33510",
                ["5:50 AM", "1:25 PM", "5:05 PM", "Sunset", "8:35 PM", "1:40 PM"],
                "https://www.brandonmasjid.org/",
                false,
                &["1:40 PM"],
            ),
        ];
        Self { venues }
    }

    /// Build a directory from already validated venues.
    ///
    /// Fails only on duplicate ids.
    pub fn from_venues(venues: Vec<Venue>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for venue in &venues {
            if !seen.insert(venue.id.as_str()) {
                return Err(DirectoryError::DuplicateId(venue.id.clone()));
            }
        }
        Ok(Self { venues })
    }

    /// Load venues from a TOML, JSON or YAML file.
    ///
    /// The file holds a `venues` array; each entry carries a `times` table
    /// with a value for every prayer:
    ///
    /// ```toml
    /// [[venues]]
    /// id = "istaba"
    /// name = "Islamic Society of Tampa Bay Area (ISTABA)"
    /// address = "7326 E. Sligh Ave, Tampa, FL"
    /// website = "https://www.istaba.org/"
    /// has_multiple_sermons = true
    /// sermon_times = ["12:30 PM", "1:40 PM"]
    ///
    /// [venues.times]
    /// fajr = "5:45 AM"
    /// dhuhr = "1:30 PM"
    /// asr = "5:00 PM"
    /// maghrib = "Sunset"
    /// isha = "8:30 PM"
    /// jumuah = "12:30 PM"
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let load_err = |source| DirectoryError::Load {
            path: path.to_path_buf(),
            source,
        };

        let config = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(load_err)?;
        let records: Vec<VenueRecord> = config.get("venues").map_err(load_err)?;

        if records.is_empty() {
            return Err(DirectoryError::Empty(path.to_path_buf()));
        }

        let venues = records
            .into_iter()
            .map(VenueRecord::into_venue)
            .collect::<Result<Vec<_>, _>>()?;
        let directory = Self::from_venues(venues)?;

        tracing::info!(path = %path.display(), venues = directory.len(), "loaded venue directory");
        Ok(directory)
    }

    /// All venues in display order.
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Iterate venues in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Venue> {
        self.venues.iter()
    }

    /// Look up a venue by id.
    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    /// Position of a venue in display order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.venues.iter().position(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Venue;
    type IntoIter = std::slice::Iter<'a, Venue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn venue(
    id: &str,
    name: &str,
    address: &str,
    times: [&str; 6],
    website: &str,
    has_multiple_sermons: bool,
    sermon_times: &[&str],
) -> Venue {
    let [fajr, dhuhr, asr, maghrib, isha, jumuah] = times.map(String::from);
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        scheduled_times: ScheduledTimes {
            fajr,
            dhuhr,
            asr,
            maghrib,
            isha,
            jumuah,
        },
        website: website.to_string(),
        has_multiple_sermons,
        sermon_times: sermon_times.iter().map(|s| s.to_string()).collect(),
    }
}

/// Venue entry as written in a venue file, before validation.
#[derive(Debug, Deserialize)]
struct VenueRecord {
    id: String,
    name: String,
    address: String,
    #[serde(default)]
    times: TimesRecord,
    website: String,
    #[serde(default)]
    has_multiple_sermons: bool,
    #[serde(default)]
    sermon_times: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TimesRecord {
    fajr: Option<String>,
    dhuhr: Option<String>,
    asr: Option<String>,
    maghrib: Option<String>,
    isha: Option<String>,
    jumuah: Option<String>,
}

impl VenueRecord {
    fn into_venue(self) -> Result<Venue, DirectoryError> {
        let id = self.id;
        let require = |value: Option<String>, prayer: Prayer| {
            value.ok_or_else(|| DirectoryError::MissingTime {
                venue: id.clone(),
                prayer,
            })
        };

        let scheduled_times = ScheduledTimes {
            fajr: require(self.times.fajr, Prayer::Fajr)?,
            dhuhr: require(self.times.dhuhr, Prayer::Dhuhr)?,
            asr: require(self.times.asr, Prayer::Asr)?,
            maghrib: require(self.times.maghrib, Prayer::Maghrib)?,
            isha: require(self.times.isha, Prayer::Isha)?,
            jumuah: require(self.times.jumuah, Prayer::Jumuah)?,
        };

        Ok(Venue {
            id,
            name: self.name.trim().to_string(),
            address: self.address,
            scheduled_times,
            website: self.website,
            has_multiple_sermons: self.has_multiple_sermons,
            sermon_times: self.sermon_times,
        })
    }
}
