//! Street/city/state/zip synthesis, ported from the reference kit's
//! `GenerateAddress` and its `CityHash` zip-salting helper.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street_number: i64,
    pub street_name: String,
    pub street_type: String,
    pub suite_number: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub zip: i64,
    pub country: String,
    pub gmt_offset: i64,
}

/// Street-number draw is a plain uniform int in the reference kit.
const MIN_STREET_NUMBER: i64 = 1;
const MAX_STREET_NUMBER: i64 = 1000;

/// `FormatSuiteNumber`: even draws become `Suite N`, odd draws become `Room N`.
fn format_suite_number(n: i64) -> String {
    if n % 2 == 0 {
        format!("Suite {n}")
    } else {
        format!("Room {n}")
    }
}

/// Custom rolling hash used to salt the zip code so that zips cluster by
/// county without being a trivial function of the county index.
fn city_hash(name: &str) -> i64 {
    let mut hash: i64 = 0;
    let mut result: i64 = 0;
    for c in name.chars() {
        hash *= 26;
        hash += c as i64 - 'A' as i64;
        if hash > 1_000_000 {
            hash %= 10_000;
            result += hash;
            hash = 0;
        }
    }
    result + hash
}

pub fn generate_address(
    dists: &DistributionStore,
    stream: &mut RandomStream,
    use_small_cities: bool,
) -> Result<Address> {
    let street_number = stream.next_uniform_int(MIN_STREET_NUMBER, MAX_STREET_NUMBER);

    let street_names = dists.find("street_names")?;
    let street_name = street_names.pick_string(1, 1, stream).to_string();

    let street_type_dist = dists.find("street_type")?;
    let street_type = street_type_dist.pick_string(1, 1, stream).to_string();

    let suite_draw = stream.next_uniform_int(1, 1000);
    let suite_number = format_suite_number(suite_draw);

    let (city, county, state, gmt_offset, zip_prefix) = if use_small_cities {
        let cities = dists.find("cities")?;
        let index = cities.pick_index(1, stream);
        let city = cities.get_string(index, 1).to_string();
        let county_dist = dists.find("fips_county")?;
        let county_index = county_dist.pick_index(1, stream);
        (
            city,
            county_dist.get_string(county_index, 1).to_string(),
            county_dist.get_string(county_index, 3).to_string(),
            county_dist.weight(county_index, 1),
            county_dist.get_int(county_index, 5),
        )
    } else {
        let county_dist = dists.find("fips_county")?;
        let county_index = county_dist.pick_index(1, stream);
        let cities = dists.find("cities")?;
        let city_index = cities.pick_index(1, stream);
        (
            cities.get_string(city_index, 1).to_string(),
            county_dist.get_string(county_index, 1).to_string(),
            county_dist.get_string(county_index, 3).to_string(),
            county_dist.weight(county_index, 1),
            county_dist.get_int(county_index, 5),
        )
    };

    let salt = city_hash(&city) % 1000;
    let zip = zip_prefix * 10000 + salt.abs();

    Ok(Address {
        street_number,
        street_name,
        street_type,
        suite_number,
        city,
        county,
        state,
        zip,
        country: "United States".to_string(),
        gmt_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::tpcds_distributions;

    #[test]
    fn format_suite_number_alternates_room_and_suite() {
        assert_eq!(format_suite_number(4), "Suite 4");
        assert_eq!(format_suite_number(7), "Room 7");
    }

    #[test]
    fn generate_address_is_deterministic() {
        let mut store = DistributionStore::new();
        tpcds_distributions(&mut store);
        let mut s1 = RandomStream::from_seed(99, 0);
        let mut s2 = RandomStream::from_seed(99, 0);
        let a1 = generate_address(&store, &mut s1, false).unwrap();
        let a2 = generate_address(&store, &mut s2, false).unwrap();
        assert_eq!(a1, a2);
        assert!(a1.zip > 0);
    }
}
