use chrono::Local;
use csv::Writer;
use log::info;
use nalgebra::DVector;
use simplelog::*;
use std::fs::File;
use std::io::{self, Write};

/// Maps a loglevel string onto a filter; `None` means logging is switched off.
/// # Panics
/// on an unknown level
pub fn level_filter(loglevel: &str) -> Option<LevelFilter> {
    match loglevel {
        "off" | "none" => None,
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => panic!("loglevel must be debug, info, warn, error or off"),
    }
}

/// Installs a terminal logger. Returns false when logging is off or a logger is already
/// installed (the second initialisation in a process is ignored).
pub fn init_logger(loglevel: Option<String>) -> bool {
    let log_option = match loglevel {
        Some(level) => match level_filter(level.as_str()) {
            Some(filter) => filter,
            None => return false,
        },
        None => LevelFilter::Info,
    };
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => {
            info!("logger started with loglevel: {}", log_option);
            true
        }
        Err(_) => false,
    }
}

/// `<name>_<date>_<time>.csv`
pub fn timestamped_filename(name: &str) -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("{}_{}.csv", name, date_and_time)
}

/// tab separated `x f(x)` columns with a header line
pub fn save_samples_to_file(
    xs: &DVector<f64>,
    ys: &DVector<f64>,
    headers: (&str, &str),
    filename: &str,
) -> io::Result<()> {
    assert_eq!(xs.len(), ys.len(), "every sample point needs a value");
    let mut file = File::create(filename)?;
    writeln!(file, "{}\t{}", headers.0, headers.1)?;
    for (x, y) in xs.iter().zip(ys.iter()) {
        writeln!(file, "{}\t{}", x, y)?;
    }
    Ok(())
}

pub fn save_samples_to_csv(
    xs: &DVector<f64>,
    ys: &DVector<f64>,
    headers: (&str, &str),
    filename: &str,
) -> io::Result<()> {
    assert_eq!(xs.len(), ys.len(), "every sample point needs a value");
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record([headers.0, headers.1])?;
    for (x, y) in xs.iter().zip(ys.iter()) {
        writer.write_record([x.to_string(), y.to_string()])?;
    }

    writer.flush()?;
    info!("samples saved to {}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("warn"), Some(LevelFilter::Warn));
        assert_eq!(level_filter("off"), None);
    }

    #[test]
    #[should_panic]
    fn test_level_filter_unknown() {
        level_filter("verbose");
    }

    #[test]
    fn test_save_samples_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.csv");
        let xs = DVector::from_vec(vec![0.0, 1.0]);
        let ys = DVector::from_vec(vec![1.0, 2.5]);
        save_samples_to_csv(&xs, &ys, ("x", "f(x)"), path.to_str().unwrap()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "x,f(x)\n0,1\n1,2.5\n");
    }

    #[test]
    fn test_save_samples_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.txt");
        let xs = DVector::from_vec(vec![0.0, 1.0]);
        let ys = DVector::from_vec(vec![1.0, 2.5]);
        save_samples_to_file(&xs, &ys, ("x", "y"), path.to_str().unwrap()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "x\ty\n0\t1\n1\t2.5\n");
    }

    #[test]
    fn test_timestamped_filename() {
        let name = timestamped_filename("samples");
        assert!(name.starts_with("samples_"));
        assert!(name.ends_with(".csv"));
    }
}
