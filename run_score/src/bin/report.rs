use std::{
    collections::{BTreeMap, BTreeSet},
    fs::File,
    io::{BufReader, Read, Write},
    path::{Path, PathBuf},
};

use activity::{
    ActivityError, ActivityRecord, ActivityType, format_distance, format_duration, format_pace,
    pace_seconds_per_km, parse_local_start,
};
use activity_calendar::{YearGrid, available_years, daily_kinds, in_year};
use gear_stats::{Gear, GearUsage, gear_stats};
use personal_bests::{Milestone, PersonalBest, personal_bests};
use run_score::{OptionsError, ScoreBreakdown, ScoringOptions, score_runs_with};
use thiserror::Error;
use time::{Date, OffsetDateTime, PrimitiveDateTime};
use tracing::{info, warn};

#[derive(Error, Debug)]
enum ReportError {
    #[error("Failed to open {}. Reason: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write report. Reason: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to read csv. Reason: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read json. Reason: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Activity(#[from] ActivityError),

    #[error("Invalid scoring options. Reason: {0}")]
    Options(#[from] OptionsError),

    #[error("Invalid calendar year. Reason: {0}")]
    InvalidDate(#[from] time::error::ComponentRange),
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Activities file location, `.json` array or csv with provider column names
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("activities.csv"), required = false)]
    pub input: PathBuf,
    /// Local "now", e.g. `2024-06-15T12:00:00`. Defaults to current local time
    #[arg(short, long, required = false)]
    pub reference: Option<String>,
    /// Score only activities of this year
    #[arg(short, long, required = false)]
    pub year: Option<i32>,
    /// Json file with scoring options, missing fields keep defaults
    #[arg(short, long, required = false)]
    pub options: Option<PathBuf>,
    /// Json file with gear inventory: `[{ "id": "g1", "name": "Trail shoes" }]`
    #[arg(short, long, required = false)]
    pub gear: Option<PathBuf>,
    /// Print json instead of text
    #[arg(short, long, default_value_t = false, required = false)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
struct Report<'a> {
    reference: String,
    year: i32,
    available_years: Vec<i32>,
    activities: usize,
    active_days: usize,
    score: ScoreBreakdown,
    personal_bests: Vec<PersonalBest<'a>>,
    gear: Vec<GearUsage>,
}

fn open(path: &Path) -> Result<BufReader<File>, ReportError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    fn of(path: &Path) -> Self {
        match path
            .extension()
            .is_some_and(|this| this.eq_ignore_ascii_case("json"))
        {
            true => Self::Json,
            false => Self::Csv,
        }
    }
}

fn read_activities(path: &Path) -> Result<Vec<ActivityRecord>, ReportError> {
    parse_activities(open(path)?, InputFormat::of(path))
}

/// Json input must be valid as a whole, bad csv rows are skipped
fn parse_activities(
    reader: impl Read,
    format: InputFormat,
) -> Result<Vec<ActivityRecord>, ReportError> {
    if format == InputFormat::Json {
        return Ok(serde_json::from_reader(reader)?);
    }

    let mut rdr = csv::Reader::from_reader(reader);

    let activities = rdr
        .deserialize::<ActivityRecord>()
        .enumerate()
        .filter_map(|(row, this)| {
            this.inspect_err(|e| warn!(row = row + 1, "skipping activity: {e}"))
                .ok()
        })
        .collect();

    Ok(activities)
}

fn read_options(path: Option<&Path>) -> Result<ScoringOptions, ReportError> {
    let options = match path {
        Some(path) => serde_json::from_reader::<_, ScoringOptions>(open(path)?)?,
        None => ScoringOptions::new(),
    };

    options.validate()?;

    Ok(options)
}

fn read_gear(path: Option<&Path>) -> Result<Vec<Gear>, ReportError> {
    match path {
        Some(path) => Ok(serde_json::from_reader(open(path)?)?),
        None => Ok(Vec::new()),
    }
}

fn local_now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|e| {
        warn!("local offset is unknown, using UTC: {e}");
        OffsetDateTime::now_utc()
    });

    PrimitiveDateTime::new(now.date(), now.time())
}

fn heatmap_cell(kinds: Option<&BTreeSet<&ActivityType>>) -> char {
    match kinds {
        None => '.',
        Some(kinds) if kinds.contains(&ActivityType::Run) => 'R',
        Some(_) => 'o',
    }
}

fn write_heatmap(
    out: &mut impl Write,
    grid: &YearGrid,
    days: &BTreeMap<Date, BTreeSet<&ActivityType>>,
) -> std::io::Result<()> {
    let mut rows = vec![vec![' '; grid.week_starts.len()]; 7];

    for date in grid.days() {
        if let Some((column, row)) = grid.cell_of(date) {
            rows[row as usize][column] = heatmap_cell(days.get(&date));
        }
    }

    let mut labels = vec![' '; grid.week_starts.len()];
    for label in &grid.month_labels {
        if let Some(cell) = labels.get_mut(label.week_index) {
            *cell = label.month.to_string().chars().next().unwrap_or(' ');
        }
    }

    writeln!(out, "{}", labels.into_iter().collect::<String>())?;
    for row in rows {
        writeln!(out, "{}", row.into_iter().collect::<String>())?;
    }

    Ok(())
}

fn write_text(
    out: &mut impl Write,
    report: &Report<'_>,
    grid: &YearGrid,
    days: &BTreeMap<Date, BTreeSet<&ActivityType>>,
) -> std::io::Result<()> {
    let Report {
        reference,
        year,
        available_years,
        activities,
        active_days,
        score,
        personal_bests,
        gear,
    } = report;

    writeln!(out, "Run score {year} (reference {reference})")?;
    writeln!(
        out,
        "Years: {}",
        available_years
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    )?;
    writeln!(out, "Activities: {activities}, active days: {active_days}")?;
    writeln!(out)?;

    for (name, value) in [
        ("Pace", score.pace),
        ("Endurance", score.endurance),
        ("Consistency", score.consistency),
        ("Progress", score.progress),
        ("Social", score.social),
        ("Elevation", score.elevation),
        ("Overall", score.overall),
    ] {
        writeln!(out, "{name:<12} {value:>3}")?;
    }

    if !personal_bests.is_empty() {
        writeln!(out)?;
        writeln!(out, "Personal bests")?;

        for best in personal_bests {
            let activity = best.activity;

            writeln!(
                out,
                "{:<22} {:>10} {:>9} {:>9} {} {}",
                best.label(),
                format_distance(activity.distance_meters),
                format_duration(activity.moving_time_seconds),
                format_pace(pace_seconds_per_km(activity.average_speed_mps)),
                activity.start_time.date(),
                activity.name,
            )?;
        }
    }

    if !gear.is_empty() {
        writeln!(out)?;
        writeln!(out, "Gear")?;

        for usage in gear {
            writeln!(
                out,
                "{:<22} {:>4} runs {:>12} {:>9}",
                usage.name,
                usage.runs,
                format_distance(usage.total_distance_meters),
                format_pace(usage.average_pace_seconds_per_km()),
            )?;
        }
    }

    writeln!(out)?;
    write_heatmap(out, grid, days)
}

fn run(
    Args {
        input,
        reference,
        year,
        options,
        gear,
        json,
    }: Args,
) -> Result<(), ReportError> {
    let reference = match reference {
        Some(reference) => parse_local_start(&reference)?,
        None => local_now(),
    };
    let options = read_options(options.as_deref())?;
    let inventory = read_gear(gear.as_deref())?;
    let activities = read_activities(&input)?;

    info!(total = activities.len(), path = %input.display(), "loaded activities");

    let year = year.unwrap_or(reference.year());
    let selected = in_year(&activities, year)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    info!(year, selected = selected.len(), "selected activities");

    let grid = YearGrid::new(year)?;
    let days = daily_kinds(&selected);

    let report = Report {
        reference: reference.to_string(),
        year,
        available_years: available_years(&activities, reference.year()),
        activities: selected.len(),
        active_days: days.len(),
        score: score_runs_with(&selected, reference, &options),
        personal_bests: personal_bests(&selected, &Milestone::DEFAULT),
        gear: gear_stats(&selected, &inventory),
    };

    let io = std::io::stdout();
    let mut out = io.lock();

    match json {
        true => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        false => write_text(&mut out, &report, &grid, &days)?,
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    run(<Args as clap::Parser>::parse())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,type,start_date_local,distance,moving_time,average_speed,total_elevation_gain,kudos_count,gear_id";

    #[test]
    fn test_input_format_from_extension() {
        assert_eq!(InputFormat::of(Path::new("runs.json")), InputFormat::Json);
        assert_eq!(InputFormat::of(Path::new("runs.JSON")), InputFormat::Json);
        assert_eq!(InputFormat::of(Path::new("runs.csv")), InputFormat::Csv);
        assert_eq!(InputFormat::of(Path::new("runs")), InputFormat::Csv);
    }

    #[test]
    fn test_csv_bad_rows_skipped() {
        let data = format!(
            "{HEADER}\n\
1,Easy,Run,2024-05-04T07:00:00Z,8000,2800,2.86,40,2,\n\
2,Broken,Run,yesterday,8000,2800,2.86,40,2,\n\
3,Tempo,Run,2024-05-06T07:00:00Z,not-a-number,2800,2.86,40,2,\n\
4,Long,Run,2024-05-08T07:00:00Z,21000,7000,3.0,120,5,g1\n"
        );

        let activities = parse_activities(data.as_bytes(), InputFormat::Csv).unwrap();

        let ids = activities.iter().map(|this| this.id).collect::<Vec<_>>();

        assert_eq!(ids, vec![1, 4]);
        assert_eq!(activities[1].gear_id.as_deref(), Some("g1"));
    }

    #[test]
    fn test_json_array() {
        let data = r#"[
            {
                "id": 7,
                "name": "Lunch Run",
                "type": "Run",
                "start_date_local": "2024-05-04T12:30:00Z",
                "distance": 5000.0,
                "moving_time": 1500,
                "average_speed": 3.33,
                "total_elevation_gain": 20.0
            }
        ]"#;

        let activities = parse_activities(data.as_bytes(), InputFormat::Json).unwrap();

        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].id, 7);
        assert_eq!(activities[0].kudos_count, 0);
    }

    #[test]
    fn test_json_bad_record_fails_whole_file() {
        let data = r#"[{ "id": 1, "type": "Run", "start_date_local": "yesterday" }]"#;

        let result = parse_activities(data.as_bytes(), InputFormat::Json);

        assert!(matches!(result, Err(ReportError::Json(_))));
    }
}
