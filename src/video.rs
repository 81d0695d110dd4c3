use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use ndarray::Array2;
use serde::Deserialize;
use thiserror::Error;
use crate::analysis::{AnalysisError, Video};
/// Name of the sidecar metadata file expected next to the frames.
pub const METADATA_FILE: &str = "video.json";
#[derive(Debug, Deserialize)]
struct VideoMeta {
    fps: f64,
}
#[derive(Debug, Error)]
pub enum VideoError {
    #[error("video path must not be empty")]
    EmptyPath,
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
    #[error("failed to read metadata '{}': {source}", .path.display())]
    MetadataIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse metadata '{}': {source}", .path.display())]
    MetadataParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to decode frame '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Invalid(#[from] AnalysisError),
}
/// Loads a video stored as a directory of PNG frames plus a `video.json`
/// metadata file holding the frame rate, e.g. `{ "fps": 30.0 }`.
///
/// Frames are read in lexicographic filename order, which matches the
/// zero-padded numbering that ffmpeg frame extraction produces. A directory
/// with metadata but no frames loads as an empty video.
pub fn load(path: &Path) -> Result<Video, VideoError> {
    if path.as_os_str().is_empty() {
        return Err(VideoError::EmptyPath);
    }
    if !path.is_dir() {
        return Err(VideoError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    let meta_path = path.join(METADATA_FILE);
    let meta_file = fs::File::open(&meta_path).map_err(|source| VideoError::MetadataIo {
        path: meta_path.clone(),
        source,
    })?;
    let meta: VideoMeta =
        serde_json::from_reader(meta_file).map_err(|source| VideoError::MetadataParse {
            path: meta_path,
            source,
        })?;
    let mut frame_paths: Vec<PathBuf> = fs::read_dir(path)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| p.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("png")))
        .collect();
    frame_paths.sort();
    let mut r = Vec::with_capacity(frame_paths.len());
    let mut g = Vec::with_capacity(frame_paths.len());
    let mut b = Vec::with_capacity(frame_paths.len());
    for frame_path in &frame_paths {
        let decoded = image::open(frame_path)
            .map_err(|source| VideoError::Decode {
                path: frame_path.clone(),
                source,
            })?
            .to_rgb8();
        let (red, green, blue) = split_planes(&decoded);
        r.push(red);
        g.push(green);
        b.push(blue);
        debug!("decoded frame '{}'", frame_path.display());
    }
    let video = Video::new(meta.fps, r, g, b)?;
    info!(
        "loaded {} frames ({}x{}) at {} fps from '{}'",
        video.frame_count(),
        video.frame_width(),
        video.frame_height(),
        video.fps(),
        path.display()
    );
    Ok(video)
}
fn split_planes(frame: &image::RgbImage) -> (Array2<u8>, Array2<u8>, Array2<u8>) {
    let (width, height) = frame.dimensions();
    let shape = (height as usize, width as usize);
    let plane = |channel: usize| {
        Array2::from_shape_fn(shape, |(row, col)| {
            frame.get_pixel(col as u32, row as u32)[channel]
        })
    };
    (plane(0), plane(1), plane(2))
}
