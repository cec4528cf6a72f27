use std::{
    collections::{BTreeMap, BTreeSet},
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

use min_cut::InvalidInput;

pub mod min_cut;

#[derive(Debug)]
pub enum Error {
    InvalidWiringText(String),
    InvalidGraph(InvalidInput),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidWiringText(s) => write!(
                f,
                "Invalid text({}) for wiring, expect a component name, a colon and its connected component names.",
                s
            ),
            Error::InvalidGraph(e) => write!(f, "Can't split given wiring diagram: {}", e),
        }
    }
}

impl error::Error for Error {}

impl From<InvalidInput> for Error {
    fn from(value: InvalidInput) -> Self {
        Error::InvalidGraph(value)
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct WiringDiagram {
    components: Vec<String>,
    wires: BTreeSet<(usize, usize)>, // (smaller index, larger index)
}

impl WiringDiagram {
    pub fn from_links(links: &[(String, String)]) -> Self {
        let component_set = links
            .iter()
            .flat_map(|(left, right)| [left, right])
            .collect::<BTreeSet<_>>();
        let components = component_set.into_iter().cloned().collect::<Vec<_>>();
        let index_map = components
            .iter()
            .enumerate()
            .map(|(ind, name)| (name.as_str(), ind))
            .collect::<BTreeMap<_, _>>();
        let wires = links
            .iter()
            .filter(|(left, right)| left != right)
            .map(|(left, right)| {
                let left_ind = index_map[left.as_str()];
                let right_ind = index_map[right.as_str()];
                (left_ind.min(right_ind), left_ind.max(right_ind))
            })
            .collect();

        Self { components, wires }
    }

    /// Component names in ascending order; a component's position is its vertex index.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn components_n(&self) -> usize {
        self.components.len()
    }

    pub fn wires_n(&self) -> usize {
        self.wires.len()
    }

    pub fn component_index(&self, name: &str) -> Option<usize> {
        self.components
            .binary_search_by(|component| component.as_str().cmp(name))
            .ok()
    }

    pub fn adjacency_matrix(&self) -> Vec<Vec<u32>> {
        let n = self.components_n();
        let mut matrix = vec![vec![0; n]; n];
        for &(left_ind, right_ind) in &self.wires {
            matrix[left_ind][right_ind] = 1;
            matrix[right_ind][left_ind] = 1;
        }

        matrix
    }

    pub fn split(&self) -> Result<Split, Error> {
        let cut = min_cut::global_min_cut(self.adjacency_matrix())?;
        let names = |inds: &[usize]| {
            inds.iter()
                .map(|&ind| self.components[ind].clone())
                .collect::<Vec<_>>()
        };

        Ok(Split {
            cut_wires_n: cut.weight() as usize,
            groups: [names(cut.side()), names(&cut.complement())],
        })
    }
}

#[derive(Debug, Clone)]
pub struct Split {
    cut_wires_n: usize,
    groups: [Vec<String>; 2],
}

impl Split {
    pub fn cut_wires_n(&self) -> usize {
        self.cut_wires_n
    }

    pub fn groups(&self) -> &[Vec<String>; 2] {
        &self.groups
    }

    pub fn group_sizes_product(&self) -> usize {
        self.groups[0].len() * self.groups[1].len()
    }
}

pub fn read_wiring_diagram<P: AsRef<Path>>(path: P) -> Result<WiringDiagram> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut links = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        links.extend(read_wiring(&line).with_context(|| {
            format!(
                "Failed to parse line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?);
    }

    Ok(WiringDiagram::from_links(&links))
}

fn read_wiring(text: &str) -> Result<Vec<(String, String)>, Error> {
    static WIRING_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\s*([a-z]+):((?:\s+[a-z]+)+)\s*$").unwrap());

    if let Some(caps) = WIRING_PATTERN.captures(text) {
        let component = caps[1].to_string();
        Ok(caps[2]
            .split_whitespace()
            .map(|other| (component.clone(), other.to_string()))
            .collect())
    } else {
        Err(Error::InvalidWiringText(text.to_string()))
    }
}

