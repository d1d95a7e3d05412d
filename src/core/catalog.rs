//! core/catalog.rs
//! Catalog file IO.
//!
//! - `player_data.xml` is read once at startup (created empty if absent)
//! - `all_songs.xml` is a one-way export, rewritten on every startup
//!
//! Never fails hard: a missing or broken catalog just means zero albums.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::CatalogError;
use super::types::{Album, Catalog, Song};

/// Written in place of a missing catalog file.
const EMPTY_CATALOG: &str = "<?xml version=\"1.0\"?>\n<root/>\n";
const XML_DECL: &str = "<?xml version=\"1.0\"?>\n";

// On-disk shape of player_data.xml

#[derive(Debug, Default, Deserialize)]
struct CatalogDoc {
    #[serde(rename = "album", default)]
    albums: Vec<AlbumRecord>,
}

#[derive(Debug, Deserialize)]
struct AlbumRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    genre: String,
    #[serde(default)]
    cover: String,
    #[serde(default)]
    songs: SongList,
}

#[derive(Debug, Default, Deserialize)]
struct SongList {
    #[serde(rename = "song", default)]
    songs: Vec<SongRecord>,
}

#[derive(Debug, Deserialize)]
struct SongRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    location: String,
}

impl From<AlbumRecord> for Album {
    fn from(r: AlbumRecord) -> Self {
        Album {
            title: r.name,
            artist: r.artist,
            genre: r.genre,
            cover: PathBuf::from(r.cover),
            songs: r
                .songs
                .songs
                .into_iter()
                .map(|s| Song {
                    name: s.name,
                    location: PathBuf::from(s.location),
                })
                .collect(),
        }
    }
}

// On-disk shape of all_songs.xml

#[derive(Debug, Serialize)]
#[serde(rename = "root")]
struct ExportDoc<'a> {
    #[serde(rename = "song")]
    songs: Vec<ExportSong<'a>>,
}

#[derive(Debug, Serialize)]
struct ExportSong<'a> {
    name: &'a str,
    location: String,
    genre: &'a str,
    artist: &'a str,
}

/// Parse catalog XML text.
pub fn parse(xml: &str) -> Result<Catalog, CatalogError> {
    let doc: CatalogDoc = quick_xml::de::from_str(xml)?;
    Ok(Catalog {
        albums: doc.albums.into_iter().map(Album::from).collect(),
    })
}

/// Read the catalog at `path`.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let xml = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&xml)
}

/// Startup entry point: never fails.
///
/// - missing or blank file -> write an empty catalog there, return zero albums
/// - unreadable/malformed -> warn, return zero albums
pub fn load_or_create(path: &Path) -> Catalog {
    if !path.exists() {
        info!(path = %path.display(), "catalog missing, creating an empty one");
        write_empty(path);
        return Catalog::default();
    }

    if is_blank(path) {
        info!(path = %path.display(), "catalog is blank, rewriting it empty");
        write_empty(path);
        return Catalog::default();
    }

    match load(path) {
        Ok(catalog) => {
            info!(albums = catalog.len(), "loaded catalog");
            catalog
        }
        Err(e) => {
            warn!("{e}; starting with an empty catalog");
            Catalog::default()
        }
    }
}

fn write_empty(path: &Path) {
    if let Err(e) = fs::write(path, EMPTY_CATALOG) {
        warn!(path = %path.display(), "could not create catalog: {e}");
    }
}

/// Zero bytes or whitespace only. Unreadable files are not blank.
fn is_blank(path: &Path) -> bool {
    fs::read(path).is_ok_and(|bytes| bytes.iter().all(u8::is_ascii_whitespace))
}

/// Flatten every song of every album into export XML.
pub fn export_xml(catalog: &Catalog) -> Result<String, CatalogError> {
    let songs = catalog
        .albums
        .iter()
        .flat_map(|album| {
            album.songs.iter().map(move |song| ExportSong {
                name: &song.name,
                location: song.location.display().to_string(),
                genre: &album.genre,
                artist: &album.artist,
            })
        })
        .collect();

    let body = quick_xml::se::to_string(&ExportDoc { songs })?;
    Ok(format!("{XML_DECL}{body}\n"))
}

/// Write the flattened song list to `path`.
pub fn write_export(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let xml = export_xml(catalog)?;
    fs::write(path, xml).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<root>
    <album>
        <name>Greatest Hits</name>
        <genre>Rock</genre>
        <artist>Neil Diamond</artist>
        <cover>./Covers/NeilDiamond.jpg</cover>
        <songs>
            <song>
                <name>Cracklin' Rosie</name>
                <location>Music/Cracklin_Rosie.wav</location>
            </song>
            <song>
                <name>Soolaimon</name>
                <location>Music/Soolaimon.wav</location>
            </song>
            <song>
                <name>Sweet Caroline</name>
                <location>Music/Sweet_Caroline.wav</location>
            </song>
        </songs>
    </album>
    <album>
        <name>Singles</name>
        <genre>Pop</genre>
        <artist>Various</artist>
        <cover>./Covers/Singles.jpg</cover>
    </album>
</root>
"#;

    #[test]
    fn test_parse_catalog() -> anyhow::Result<()> {
        let catalog = parse(SAMPLE)?;

        assert_eq!(catalog.len(), 2);

        let hits = &catalog.albums[0];
        assert_eq!(hits.title, "Greatest Hits");
        assert_eq!(hits.artist, "Neil Diamond");
        assert_eq!(hits.genre, "Rock");
        assert_eq!(hits.cover, PathBuf::from("./Covers/NeilDiamond.jpg"));
        assert_eq!(hits.songs.len(), 3);
        assert_eq!(hits.songs[1].name, "Soolaimon");
        assert_eq!(hits.songs[1].location, PathBuf::from("Music/Soolaimon.wav"));

        // No <songs> element at all -> zero songs
        assert!(catalog.albums[1].songs.is_empty());

        Ok(())
    }

    #[test]
    fn test_empty_root_is_empty_catalog() -> anyhow::Result<()> {
        assert!(parse(EMPTY_CATALOG)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_created_empty() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("player_data.xml");

        let catalog = load_or_create(&path);

        assert!(catalog.is_empty());
        assert!(path.exists());
        assert!(load(&path)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("player_data.xml");
        fs::write(&path, "<root><album><name>Broken</album>")?;

        assert!(load(&path).is_err());
        assert!(load_or_create(&path).is_empty());
        Ok(())
    }

    #[test]
    fn test_unrelated_siblings_are_skipped() -> anyhow::Result<()> {
        let xml = r#"<root>
            <album><name>A</name></album>
            <!-- c -->
            <playlist/>
            <album>
                <name>B</name>
                <songs>
                    <song><name>one</name><location>Music/one.wav</location></song>
                    <note>liner notes</note>
                    <song><name>two</name><location>Music/two.wav</location></song>
                </songs>
            </album>
        </root>"#;

        let catalog = parse(xml)?;

        let titles: Vec<&str> = catalog.albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        let songs: Vec<&str> = catalog.albums[1].songs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(songs, vec!["one", "two"]);
        Ok(())
    }

    #[test]
    fn test_missing_fields_default_to_empty() -> anyhow::Result<()> {
        let xml = r#"<root>
            <album>
                <name>X</name>
                <songs><song><name>No Location</name></song></songs>
            </album>
        </root>"#;

        let catalog = parse(xml)?;

        assert_eq!(catalog.len(), 1);
        let album = &catalog.albums[0];
        assert_eq!(album.title, "X");
        assert_eq!(album.artist, "");
        assert_eq!(album.genre, "");
        assert_eq!(album.cover, PathBuf::new());
        assert_eq!(album.songs.len(), 1);
        assert_eq!(album.songs[0].name, "No Location");
        assert_eq!(album.songs[0].location, PathBuf::new());
        Ok(())
    }

    #[test]
    fn test_blank_file_is_rewritten_empty() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("player_data.xml");
        fs::write(&path, "")?;

        assert!(load_or_create(&path).is_empty());
        assert_eq!(fs::read_to_string(&path)?, EMPTY_CATALOG);

        fs::write(&path, "  \n\t")?;
        assert!(load_or_create(&path).is_empty());
        assert_eq!(fs::read_to_string(&path)?, EMPTY_CATALOG);
        Ok(())
    }

    #[test]
    fn test_export_flattens_all_songs() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("all_songs.xml");

        write_export(&parse(SAMPLE)?, &path)?;
        let xml = fs::read_to_string(&path)?;

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<song>").count(), 3);
        assert!(xml.contains("<name>Soolaimon</name>"));
        assert!(xml.contains("<location>Music/Soolaimon.wav</location>"));
        assert!(xml.contains("<genre>Rock</genre>"));
        assert!(xml.contains("<artist>Neil Diamond</artist>"));
        Ok(())
    }
}
