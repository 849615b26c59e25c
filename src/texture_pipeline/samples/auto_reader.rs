use crate::texture_pipeline::common::error::Result;
use crate::texture_pipeline::samples::image_reader::ImageSampleReader;
use crate::texture_pipeline::samples::reader::SampleReader;
use crate::texture_pipeline::samples::tiff_reader::TiffSampleReader;
use crate::texture_pipeline::samples::types::SampleImage;

const TIFF_LITTLE_ENDIAN: &[u8] = b"II*\0";
const TIFF_BIG_ENDIAN: &[u8] = b"MM\0*";
const BIGTIFF_LITTLE_ENDIAN: &[u8] = b"II+\0";
const BIGTIFF_BIG_ENDIAN: &[u8] = b"MM\0+";

/// Picks the TIFF reader for TIFF or BigTIFF magic bytes and the `image` reader otherwise.
pub struct AutoSampleReader;

impl AutoSampleReader {
    pub fn is_tiff(data: &[u8]) -> bool {
        [TIFF_LITTLE_ENDIAN, TIFF_BIG_ENDIAN, BIGTIFF_LITTLE_ENDIAN, BIGTIFF_BIG_ENDIAN]
            .iter()
            .any(|magic| data.starts_with(magic))
    }
}

impl SampleReader for AutoSampleReader {
    fn read_samples(&self, data: &[u8]) -> Result<SampleImage> {
        if Self::is_tiff(data) {
            TiffSampleReader.read_samples(data)
        } else {
            ImageSampleReader.read_samples(data)
        }
    }
}
