//! Weighted lookup tables loaded from the `dists.dss`-style resource (§4.3).
//!
//! A [`Distribution`] is a fixed-shape table: some number of string "value
//! columns" and some number of weighted "weight columns" sharing the same
//! row count. [`DistributionStore`] owns every distribution for one
//! benchmark, loaded once and borrowed read-only for the lifetime of every
//! row generator built against it.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::random::RandomStream;

/// One named weighted-choice / lookup table.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    name: String,
    /// `values[value_col][row]`, 0-based row storage; callers index 1-based.
    values: Vec<Vec<String>>,
    /// `weights[weight_col][row]` cumulative weight, 0-based row storage.
    cumulative_weights: Vec<Vec<i64>>,
}

impl Distribution {
    pub fn builder(name: impl Into<String>) -> DistributionBuilder {
        DistributionBuilder {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.values.first().map(|c| c.len()).unwrap_or(0)
    }

    /// 1-based row index, 1-based value column.
    pub fn get_string(&self, index: i64, value_col: usize) -> &str {
        &self.values[value_col - 1][(index - 1) as usize]
    }

    pub fn get_int(&self, index: i64, value_col: usize) -> i64 {
        self.get_string(index, value_col).trim().parse().unwrap_or(0)
    }

    pub fn weight(&self, index: i64, weight_col: usize) -> i64 {
        let cumulative = &self.cumulative_weights[weight_col - 1];
        let current = cumulative[(index - 1) as usize];
        if index > 1 {
            current - cumulative[(index - 2) as usize]
        } else {
            current
        }
    }

    pub fn max_weight(&self, weight_col: usize) -> i64 {
        let cumulative = &self.cumulative_weights[weight_col - 1];
        *cumulative.last().unwrap_or(&0)
    }

    /// Draws `w` uniformly in `[1, max_weight]` and binary-searches the
    /// cumulative weight column for the first row whose cumulative weight is
    /// `>= w`, returning its 1-based row index.
    pub fn pick_index(&self, weight_col: usize, stream: &mut RandomStream) -> i64 {
        let max_weight = self.max_weight(weight_col);
        let pick = stream.next_uniform_int(1, max_weight.max(1));
        let cumulative = &self.cumulative_weights[weight_col - 1];
        match cumulative.binary_search(&pick) {
            Ok(i) => (i + 1) as i64,
            Err(i) => (i + 1) as i64,
        }
    }

    pub fn pick_string(
        &self,
        value_col: usize,
        weight_col: usize,
        stream: &mut RandomStream,
    ) -> &str {
        let index = self.pick_index(weight_col, stream);
        self.get_string(index, value_col)
    }
}

pub struct DistributionBuilder {
    name: String,
    rows: Vec<(Vec<String>, Vec<i64>)>,
}

impl DistributionBuilder {
    pub fn row(mut self, values: &[&str], weights: &[i64]) -> Self {
        self.rows.push((
            values.iter().map(|s| s.to_string()).collect(),
            weights.to_vec(),
        ));
        self
    }

    pub fn build(self) -> Distribution {
        let value_cols = self.rows.first().map(|(v, _)| v.len()).unwrap_or(0);
        let weight_cols = self.rows.first().map(|(_, w)| w.len()).unwrap_or(0);
        let mut values = vec![Vec::with_capacity(self.rows.len()); value_cols];
        let mut cumulative_weights = vec![Vec::with_capacity(self.rows.len()); weight_cols];
        let mut running = vec![0i64; weight_cols];

        for (row_values, row_weights) in self.rows {
            for (col, v) in row_values.into_iter().enumerate() {
                values[col].push(v);
            }
            for (col, w) in row_weights.into_iter().enumerate() {
                running[col] += w;
                cumulative_weights[col].push(running[col]);
            }
        }

        Distribution {
            name: self.name,
            values,
            cumulative_weights,
        }
    }
}

/// Read-only collection of every distribution needed by one benchmark.
#[derive(Debug, Clone, Default)]
pub struct DistributionStore {
    distributions: HashMap<String, Distribution>,
}

impl DistributionStore {
    pub fn new() -> Self {
        DistributionStore {
            distributions: HashMap::new(),
        }
    }

    pub fn insert(&mut self, dist: Distribution) {
        self.distributions.insert(dist.name().to_string(), dist);
    }

    pub fn find(&self, name: &str) -> Result<&Distribution> {
        self.distributions
            .get(name)
            .ok_or_else(|| Error::resource_load(format!("missing distribution '{name}'")))
    }

    /// Parses the `dists.dss`-style text resource: blocks of
    /// `name nvalues=N nweights=M` followed by `|`-delimited rows (escaped
    /// with `\|`), terminated by a blank `END` line. `--` starts a
    /// line comment.
    pub fn parse(text: &str) -> Result<Self> {
        let mut store = DistributionStore::new();
        let mut lines = text.lines().peekable();
        let mut line_no = 0usize;

        while let Some(raw) = lines.next() {
            line_no += 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with("--") {
                continue;
            }

            let mut header = line.split_whitespace();
            let name = header.next().ok_or_else(|| {
                Error::resource_load(format!("line {line_no}: missing distribution name"))
            })?;
            let mut nvalues = 1usize;
            let mut nweights = 1usize;
            for token in header {
                if let Some(v) = token.strip_prefix("nvalues=") {
                    nvalues = v.parse().map_err(|_| {
                        Error::resource_load(format!("line {line_no}: bad nvalues"))
                    })?;
                } else if let Some(v) = token.strip_prefix("nweights=") {
                    nweights = v.parse().map_err(|_| {
                        Error::resource_load(format!("line {line_no}: bad nweights"))
                    })?;
                }
            }

            let mut builder = Distribution::builder(name);
            loop {
                let Some(row_line) = lines.next() else {
                    return Err(Error::resource_load(format!(
                        "distribution '{name}' missing END terminator"
                    )));
                };
                line_no += 1;
                let row_line = row_line.trim();
                if row_line.is_empty() || row_line.starts_with("--") {
                    continue;
                }
                if row_line == "END" {
                    break;
                }
                let fields = split_escaped(row_line);
                if fields.len() != nvalues + nweights {
                    return Err(Error::resource_load(format!(
                        "line {line_no}: expected {} fields, found {}",
                        nvalues + nweights,
                        fields.len()
                    )));
                }
                let values: Vec<&str> = fields[..nvalues].iter().map(String::as_str).collect();
                let weights: Result<Vec<i64>> = fields[nvalues..]
                    .iter()
                    .map(|w| {
                        w.parse::<i64>().map_err(|_| {
                            Error::resource_load(format!("line {line_no}: bad weight '{w}'"))
                        })
                    })
                    .collect();
                builder = builder.row(&values, &weights?);
            }
            store.insert(builder.build());
        }

        Ok(store)
    }
}

fn split_escaped(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '|' => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_simple_block() {
        let text = "\
-- a tiny distribution
colors nvalues=1 nweights=1
red|1
blue|1
green|2
END
";
        let store = DistributionStore::parse(text).unwrap();
        let colors = store.find("colors").unwrap();
        assert_eq!(colors.size(), 3);
        assert_eq!(colors.max_weight(1), 4);
        assert_eq!(colors.get_string(3, 1), "green");
    }

    #[test]
    fn pick_index_is_deterministic() {
        let dist = Distribution::builder("d")
            .row(&["a"], &[1])
            .row(&["b"], &[1])
            .row(&["c"], &[1])
            .build();
        let mut s1 = RandomStream::from_seed(42, 0);
        let mut s2 = RandomStream::from_seed(42, 0);
        assert_eq!(dist.pick_index(1, &mut s1), dist.pick_index(1, &mut s2));
    }
}
