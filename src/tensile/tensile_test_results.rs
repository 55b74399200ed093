use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the results of a uniaxial tensile test
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TensileTestResults {
    pub stretch: Vec<f64>,                // axial stretch λ = F₁₁
    pub lateral_stretch: Vec<[f64; 2]>,   // lateral stretches (F₂₂, F₃₃)
    pub hencky_strain: Vec<f64>,          // axial Hencky strain
    pub second_piola_kirchhoff: Vec<f64>, // axial second Piola-Kirchhoff stress
    pub cauchy: Vec<f64>,                 // axial Cauchy stress
    pub iterations: Vec<usize>,           // number of Newton iterations
}

impl TensileTestResults {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        TensileTestResults {
            stretch: Vec::new(),
            lateral_stretch: Vec::new(),
            hencky_strain: Vec::new(),
            second_piola_kirchhoff: Vec::new(),
            cauchy: Vec::new(),
            iterations: Vec::new(),
        }
    }

    /// Returns the number of recorded states
    pub fn len(&self) -> usize {
        self.stretch.len()
    }

    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let results = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(results)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
