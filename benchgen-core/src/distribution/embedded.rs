//! Built-in default distributions used when no `distribution_dir` override is
//! supplied. The vocabulary here is a condensed, representative subset of the
//! reference kit's `dists.dss` — enough to drive every grammar/lookup path
//! exercised by the row generators, not a verbatim transcription of the full
//! official corpus (see DESIGN.md).

use super::store::{Distribution, DistributionStore};

fn named(name: &str, values: &[&str]) -> Distribution {
    let mut b = Distribution::builder(name);
    for v in values {
        b = b.row(&[v], &[1]);
    }
    b.build()
}

pub fn shared_text_grammar(store: &mut DistributionStore) {
    store.insert(named(
        "nouns",
        &[
            "foxes", "ideas", "theodolites", "pinto beans", "instructions", "dependencies",
            "excuses", "platelets", "asymptotes", "forges", "accounts", "pearls", "tithes",
            "packages", "requests", "dolphins",
        ],
    ));
    store.insert(named(
        "verbs",
        &[
            "sleep", "wake", "are", "cajole", "haggle", "nag", "use", "boost", "request",
            "detect", "affix", "integrate", "hinder", "promise",
        ],
    ));
    store.insert(named(
        "adjectives",
        &[
            "furious", "sly", "careful", "blithe", "quick", "fluffy", "slow", "quiet", "ruthless",
            "thin", "close", "final", "special", "ironic",
        ],
    ));
    store.insert(named(
        "adverbs",
        &[
            "sometimes", "always", "never", "furiously", "slyly", "carefully", "blithely",
            "quickly", "fluffily", "slowly", "quietly", "ruthlessly",
        ],
    ));
    store.insert(named("auxiliaries", &["do", "does", "did", "can", "could", "may", "will"]));
    store.insert(named("terminators", &[".", "!", "?"]));
    store.insert(named("articles", &["the", "a", "an"]));
    store.insert(named("prepositions", &["above", "across", "among", "around", "at", "beneath", "beside", "besides", "beyond", "by", "despite"]));

    store.insert(named("grammar", &["VP", "NP", "VP NP"]));
    store.insert(named("np", &["ARTICLE NOUN", "ADJECTIVE NOUN"]));
    store.insert(named("vp", &["VERB", "ADVERB VERB"]));
}

pub fn tpch_distributions(store: &mut DistributionStore) {
    store.insert(named(
        "nations",
        &[
            "ALGERIA", "ARGENTINA", "BRAZIL", "CANADA", "EGYPT", "ETHIOPIA", "FRANCE", "GERMANY",
            "INDIA", "INDONESIA", "IRAN", "IRAQ", "JAPAN", "JORDAN", "KENYA", "MOROCCO",
            "MOZAMBIQUE", "PERU", "CHINA", "ROMANIA", "SAUDI ARABIA", "VIETNAM", "RUSSIA",
            "UNITED KINGDOM", "UNITED STATES",
        ],
    ));
    store.insert(named(
        "regions",
        &["AFRICA", "AMERICA", "ASIA", "EUROPE", "MIDDLE EAST"],
    ));
    store.insert(named(
        "colors",
        &[
            "almond", "antique", "aquamarine", "azure", "beige", "bisque", "black", "blanched",
            "blue", "blush", "brown", "burlywood", "burnished", "chartreuse", "chiffon",
            "chocolate", "coral", "cornflower", "cornsilk", "cream", "cyan",
        ],
    ));
    store.insert(named(
        "p_types",
        &[
            "STANDARD ANODIZED TIN", "SMALL BRUSHED BRASS", "MEDIUM PLATED STEEL",
            "LARGE POLISHED COPPER", "ECONOMY BURNISHED NICKEL", "PROMO ANODIZED TIN",
        ],
    ));
    store.insert(named("p_cntr", &["1", "2", "3", "4", "5", "6", "7", "8"]));
    store.insert(named(
        "containers",
        &[
            "SM CASE", "SM BOX", "SM PACK", "SM PKG", "SM BAG", "SM JAR", "SM DRUM", "SM CAN",
            "MED CASE", "MED BOX", "MED PACK", "MED PKG", "MED BAG", "MED JAR", "MED DRUM",
            "LG CASE", "LG BOX", "LG PACK", "LG PKG", "LG BAG", "LG JAR", "LG DRUM", "LG CAN",
            "JUMBO CASE", "JUMBO BOX", "JUMBO PACK", "JUMBO JAR", "WRAP CASE", "WRAP BOX",
            "WRAP PACK", "WRAP DRUM",
        ],
    ));
    store.insert(named(
        "o_oprio",
        &["1-URGENT", "2-HIGH", "3-MEDIUM", "4-NOT SPECIFIED", "5-LOW"],
    ));
    store.insert(named(
        "instruct",
        &["DELIVER IN PERSON", "COLLECT COD", "NONE", "TAKE BACK RETURN"],
    ));
    store.insert(named("smode", &["REG AIR", "AIR", "RAIL", "SHIP", "TRUCK", "MAIL", "FOB"]));
    store.insert(named("category", &["MACHINERY", "AUTOMOBILE", "HOUSEHOLD", "FURNITURE"]));
    store.insert(named("rflag", &["R", "A", "N"]));
    store.insert(named(
        "msegmnt",
        &["AUTOMOBILE", "BUILDING", "FURNITURE", "MACHINERY", "HOUSEHOLD"],
    ));
    store.insert(named(
        "p_name_words",
        &[
            "almond", "antique", "aquamarine", "azure", "beige", "bisque", "black", "blanched",
            "blue", "blush", "brown", "burlywood", "burnished", "chartreuse", "chiffon",
            "chocolate", "coral", "cornflower", "cornsilk", "cream", "cyan", "dark", "deep",
            "dim", "dodger", "drab", "firebrick", "floral", "forest", "frosted", "gainsboro",
            "ghost", "goldenrod", "green", "grey", "honeydew", "hot", "indian", "ivory", "khaki",
            "lace", "lavender", "lawn", "lemon", "light", "lime", "linen", "magenta", "maroon",
            "medium", "metallic", "midnight", "mint", "misty", "moccasin", "navajo", "navy",
            "olive", "orange", "orchid", "pale", "papaya", "peach", "peru", "pink", "plum",
            "powder", "puff", "purple", "red", "rose", "rosy", "royal", "saddle", "salmon",
            "sandy", "seashell", "sienna", "sky", "slate", "smoke", "snow", "spring", "steel",
            "tan", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "yellow",
        ],
    ));
    shared_text_grammar(store);
}

pub fn ssb_distributions(store: &mut DistributionStore) {
    tpch_distributions(store);
}

pub fn tpcds_distributions(store: &mut DistributionStore) {
    store.insert(named(
        "street_names",
        &[
            "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "View", "Washington", "Lake", "Hill",
            "Park", "Ridge", "Sunset", "Spring", "River", "Forest",
        ],
    ));
    store.insert(named(
        "street_type",
        &["Street", "Avenue", "Lane", "Boulevard", "Road", "Court", "Way", "Circle", "Drive"],
    ));
    store.insert(named(
        "cities",
        &[
            "Fairview", "Midway", "Oak Ridge", "Five Forks", "Riverside", "Union", "Glendale",
            "Clinton", "Salem", "Greenville", "Georgetown", "Franklin", "Springfield", "Centerville",
        ],
    ));

    let fips = {
        let mut b = Distribution::builder("fips_county");
        // value cols: [county_name, county(dup), state, extra, zip_prefix], weight col: [gmt_offset]
        b = b.row(&["Autauga County", "Autauga County", "AL", "AL", "3"], &[-6]);
        b = b.row(&["Baldwin County", "Baldwin County", "AL", "AL", "3"], &[-6]);
        b = b.row(&["Cook County", "Cook County", "IL", "IL", "6"], &[-6]);
        b = b.row(&["Orange County", "Orange County", "CA", "CA", "9"], &[-8]);
        b = b.row(&["King County", "King County", "WA", "WA", "9"], &[-8]);
        b = b.row(&["Harris County", "Harris County", "TX", "TX", "7"], &[-6]);
        b = b.row(&["Miami-Dade County", "Miami-Dade County", "FL", "FL", "3"], &[-5]);
        b = b.row(&["Suffolk County", "Suffolk County", "NY", "NY", "1"], &[-5]);
        b.build()
    };
    store.insert(fips);

    store.insert(named(
        "first_names",
        &[
            "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
            "William", "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
        ],
    ));
    store.insert(named(
        "last_names",
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
        ],
    ));
    store.insert(named(
        "top_domains",
        &["gmail.com", "yahoo.com", "hotmail.com", "aol.com", "comcast.net"],
    ));
    store.insert(named(
        "category",
        &["Women", "Men", "Children", "Sports", "Electronics", "Home", "Music", "Books"],
    ));
    store.insert(named(
        "brand_syllables",
        &["ana", "bar", "cor", "dis", "exp", "fin", "gol", "hol", "inf", "jus"],
    ));

    // calendar/hours are weighted tables, not simple lists; build directly.
    let calendar = {
        let mut b = Distribution::builder("calendar");
        for day in 1..=366 {
            let label = day.to_string();
            // value col 2 = quarter-of-year for this day-of-year, value col 3 =
            // holiday flag (1 on a handful of fixed reference dates).
            let qoy = ((day - 1) / 92 + 1).min(4).to_string();
            let holiday = i64::from(matches!(day, 1 | 186 | 359)).to_string();
            // weight_set 1 = uniform, weight_set 2 = uniform-leap,
            // weight_set 3 = sales (mild Nov/Dec bump), weight_set 4 = sales-leap
            let sales_weight = if (330..=365).contains(&day) { 150 } else { 100 };
            b = b.row(
                &[Box::leak(label.into_boxed_str()), Box::leak(qoy.into_boxed_str()), Box::leak(holiday.into_boxed_str())],
                &[100, 100, sales_weight, sales_weight],
            );
        }
        b.build()
    };
    store.insert(calendar);

    let hours = {
        let mut b = Distribution::builder("hours");
        for hour in 0..24 {
            let weight_store = if (8..=20).contains(&hour) { 10 } else { 2 };
            let label = hour.to_string();
            b = b.row(
                &[Box::leak(label.into_boxed_str())],
                &[weight_store, weight_store, weight_store],
            );
        }
        b.build()
    };
    store.insert(hours);

    store.insert(named(
        "catalog_page_type",
        &["bi-annual", "quarterly", "monthly"],
    ));

    shared_text_grammar(store);
}
