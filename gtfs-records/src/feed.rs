//! Reading of a whole feed, from a directory or a zip archive
use crate::dataset::*;
use crate::decode::Entity;
use crate::objects::*;
use crate::Error;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// Allows to parameterize how the feed is read
///
/// ```
/// let feed = gtfs_records::FeedReader::default()
///     .read_stop_times(false) // Won’t read the stop times to save time and memory
///     .skip_invalid_records(true) // Invalid lines are logged and dropped instead of failing
///     .read_from_path("fixtures/basic")?;
/// assert_eq!(0, feed.stop_times.len());
/// assert_eq!(1, feed.agencies.len());
/// # Ok::<(), gtfs_records::Error>(())
/// ```
#[derive(Derivative, Debug, Clone)]
#[derivative(Default)]
pub struct FeedReader {
    /// [StopTime] are very large and not always needed. This allows to skip reading them
    #[derivative(Default(value = "true"))]
    pub read_stop_times: bool,
    /// Should a line that can not be decoded be skipped instead of failing the whole file
    #[derivative(Default(value = "false"))]
    pub skip_invalid_records: bool,
    /// Should an empty file (without even a header) be an error
    #[derivative(Default(value = "false"))]
    pub reject_empty_files: bool,
}

impl FeedReader {
    /// Configures the reader to read or not the stop times (default: true)
    ///
    /// This can be useful to save time and memory with large datasets when the timetable are not needed
    /// Returns Self and can be chained
    pub fn read_stop_times(mut self, read_stop_times: bool) -> Self {
        self.read_stop_times = read_stop_times;
        self
    }

    /// Configures what happens when a line can not be decoded (default: false)
    ///
    /// when true, the line is logged as a warning and dropped
    /// when false, the whole file is in error
    /// Returns Self and can be chained
    pub fn skip_invalid_records(mut self, skip_invalid_records: bool) -> Self {
        self.skip_invalid_records = skip_invalid_records;
        self
    }

    /// Configures what happens when a file has no header (default: false)
    ///
    /// when true, reading fails with [Error::MissingHeader]
    /// when false, the file is read as an empty dataset
    /// Returns Self and can be chained
    pub fn reject_empty_files(mut self, reject_empty_files: bool) -> Self {
        self.reject_empty_files = reject_empty_files;
        self
    }

    /// Reads the feed from a local zip archive or local directory
    pub fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Feed, Error> {
        let p = path.as_ref();
        log::info!("reading GTFS from {}", p.display());
        if p.is_file() {
            let reader = File::open(p)?;
            self.read_from_reader(reader)
        } else if p.is_dir() {
            self.read_from_directory(p)
        } else {
            Err(Error::NotFileNorDirectory(format!("{}", p.display())))
        }
    }

    fn read_from_directory(&self, p: &Path) -> Result<Feed, Error> {
        let now = Utc::now();
        let mut files: Vec<String> = std::fs::read_dir(p)?
            .filter_map(|d| d.ok().and_then(|d| d.file_name().to_str().map(|s| s.to_owned())))
            .collect();
        files.sort();

        Ok(Feed {
            agencies: self.read_from_file(p)?,
            routes: self.read_from_file(p)?,
            stops: self.read_from_file(p)?,
            trips: self.read_from_file(p)?,
            stop_times: if self.read_stop_times {
                self.read_from_file(p)?
            } else {
                Dataset::default()
            },
            read_duration: Utc::now().signed_duration_since(now).num_milliseconds(),
            files,
            sha256: None,
        })
    }

    /// Reads a zipped feed from any object implementing [std::io::Read] and [std::io::Seek]
    ///
    /// The files can be at the root of the archive or in a sub directory.
    pub fn read_from_reader<T: Read + Seek>(&self, reader: T) -> Result<Feed, Error> {
        let now = Utc::now();
        let mut hasher = Sha256::new();
        let mut buf_reader = std::io::BufReader::new(reader);
        std::io::copy(&mut buf_reader, &mut hasher)?;
        let hash = hasher.finalize();
        let mut archive = zip::ZipArchive::new(buf_reader)?;
        let mut file_mapping = HashMap::new();
        let mut files = Vec::new();

        for i in 0..archive.len() {
            let archive_file = archive.by_index(i)?;
            files.push(archive_file.name().to_owned());

            for gtfs_file in [
                Agency::FILE_NAME,
                Route::FILE_NAME,
                Stop::FILE_NAME,
                Trip::FILE_NAME,
                StopTime::FILE_NAME,
            ] {
                let path = Path::new(archive_file.name());
                if path.file_name() == Some(std::ffi::OsStr::new(gtfs_file)) {
                    file_mapping.insert(gtfs_file, i);
                    break;
                }
            }
        }

        Ok(Feed {
            agencies: self.read_from_archive(&file_mapping, &mut archive)?,
            routes: self.read_from_archive(&file_mapping, &mut archive)?,
            stops: self.read_from_archive(&file_mapping, &mut archive)?,
            trips: self.read_from_archive(&file_mapping, &mut archive)?,
            stop_times: if self.read_stop_times {
                self.read_from_archive(&file_mapping, &mut archive)?
            } else {
                Dataset::default()
            },
            read_duration: Utc::now().signed_duration_since(now).num_milliseconds(),
            files,
            sha256: Some(format!("{:x}", hash)),
        })
    }

    /// Decodes the content of one file, applying the policies of the reader
    pub fn parse_dataset<E: Entity>(&self, content: &str) -> Result<Dataset<E>, Error> {
        let reader = RecordReader::<E>::new(content)?;
        if !reader.has_header() && self.reject_empty_files {
            return Err(Error::MissingHeader(E::FILE_NAME.to_owned()));
        }
        let mut dataset = Dataset::with_header(reader.header().to_vec());
        let mut skipped = 0;
        for record in reader {
            match record {
                Ok(entity) => dataset.push(entity),
                Err(e) if self.skip_invalid_records => {
                    let cause = e.source().map(|s| s.to_string()).unwrap_or_default();
                    log::warn!("skipping record: {}: {}", e, cause);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        log::debug!(
            "{}: {} records read, {} skipped",
            E::FILE_NAME,
            dataset.len(),
            skipped
        );
        Ok(dataset)
    }

    fn read_dataset<E: Entity, R: Read>(&self, mut reader: R) -> Result<Dataset<E>, Error> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| Error::NamedFileIO {
                file_name: E::FILE_NAME.to_owned(),
                source: Box::new(e),
            })?;
        self.parse_dataset(&content)
    }

    fn read_from_file<E: Entity>(&self, dir_path: &Path) -> Result<Dataset<E>, Error> {
        let path = dir_path.join(E::FILE_NAME);
        if !path.exists() {
            return Err(Error::MissingFile(E::FILE_NAME.to_owned()));
        }
        File::open(path)
            .map_err(|e| Error::NamedFileIO {
                file_name: E::FILE_NAME.to_owned(),
                source: Box::new(e),
            })
            .and_then(|r| self.read_dataset(r))
    }

    fn read_from_archive<E: Entity, T: Read + Seek>(
        &self,
        file_mapping: &HashMap<&str, usize>,
        archive: &mut zip::ZipArchive<T>,
    ) -> Result<Dataset<E>, Error> {
        let i = file_mapping
            .get(E::FILE_NAME)
            .ok_or_else(|| Error::MissingFile(E::FILE_NAME.to_owned()))?;
        let file = archive.by_index(*i).map_err(|e| Error::NamedFileIO {
            file_name: E::FILE_NAME.to_owned(),
            source: Box::new(e),
        })?;
        self.read_dataset(file)
    }
}

/// The five main files of a GTFS feed, each decoded in its [Dataset]
///
/// This is probably the entry point you want to use:
/// ```
/// let feed = gtfs_records::Feed::from_path("fixtures/basic")?;
/// assert_eq!(feed.stops.len(), 3);
/// assert_eq!("Chicago Transit Authority", feed.agency().unwrap().name);
/// # Ok::<(), gtfs_records::Error>(())
/// ```
///
/// If you want to configure the behaviour (e.g. skipping : [StopTime]), see [FeedReader]
#[derive(Debug, Default)]
pub struct Feed {
    /// Time needed to read and parse the feed in milliseconds
    pub read_duration: i64,
    /// All agencies
    pub agencies: Agencies,
    /// All routes
    pub routes: Routes,
    /// All stops
    pub stops: Stops,
    /// All trips
    pub trips: Trips,
    /// All stop times, empty if [FeedReader::read_stop_times] is false
    pub stop_times: StopTimes,
    /// All files that are present in the feed
    pub files: Vec<String>,
    /// sha256 sum of the archive, None when read from a directory
    pub sha256: Option<String>,
}

impl Feed {
    /// Reads the feed from a local zip archive or local directory with the default [FeedReader]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Feed, Error> {
        FeedReader::default().read_from_path(path)
    }

    /// Reads a zipped feed with the default [FeedReader]
    pub fn from_reader<T: Read + Seek>(reader: T) -> Result<Feed, Error> {
        FeedReader::default().read_from_reader(reader)
    }

    /// The first agency of the feed. Most feeds have a single one
    pub fn agency(&self) -> Option<&Agency> {
        self.agencies.first()
    }

    /// Prints on stdout some basic statistics about the feed (numbers of elements for each object). Mostly to be sure that everything was read
    pub fn print_stats(&self) {
        println!("GTFS data:");
        println!("  Read in {} ms", self.read_duration);
        println!("  Agencies: {}", self.agencies.len());
        println!("  Routes: {}", self.routes.len());
        println!("  Stops: {}", self.stops.len());
        println!("  Trips: {}", self.trips.len());
        println!("  Stop times: {}", self.stop_times.len());
        if let Some(sha256) = &self.sha256 {
            println!("  Sha256: {}", sha256);
        }
    }
}
