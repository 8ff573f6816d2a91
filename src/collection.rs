use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::{Builder, NamedTempFile};

use crate::{
    error::{Error, Result},
    feature::{to_feature, FeatureCollection},
    office::RawOffice,
};

pub const OUTPUT: &str = "AFP_France_offices.geojson";

pub fn build_collection(offices: &[RawOffice]) -> Result<FeatureCollection> {
    let features = offices
        .iter()
        .enumerate()
        .map(|(index, office)| {
            log::debug!("Mapping office #{index} ({})", office.location_city);
            to_feature(office).map_err(|source| Error::Value { index, source })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FeatureCollection { features })
}

/// Maps every office and writes the collection to `path`, returning the
/// number of features written. The file is replaced atomically, so `path`
/// is never left half written.
pub fn write_collection(offices: &[RawOffice], path: &Path, pretty: bool) -> Result<usize> {
    let collection = build_collection(offices)?;

    let contents = if pretty {
        let mut x = serde_json::to_string_pretty(&collection).map_err(Error::Encode)?;
        x.push('\n');
        x
    } else {
        serde_json::to_string(&collection).map_err(Error::Encode)?
    };

    let write_err = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(x) if !x.as_os_str().is_empty() => x,
        _ => Path::new("."),
    };

    let mut file = temp_file(dir, path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|x| write_err(x.error))?;

    Ok(collection.features.len())
}

/// Creates the temp file with the mode a plain create would give `target`,
/// or with the mode of `target` when it already exists.
fn temp_file(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // umask still applies
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let file = builder.tempfile_in(dir)?;

    if let Ok(metadata) = fs::metadata(target) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    Ok(file)
}
