use crate::texture_pipeline::common::error::Result;
use crate::texture_pipeline::samples::types::SampleImage;

pub trait SampleReader {
    fn read_samples(&self, data: &[u8]) -> Result<SampleImage>;
}
