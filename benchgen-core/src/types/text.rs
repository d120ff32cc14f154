//! Grammar-driven comment/description text, built from the `grammar`/`np`/`vp`
//! production-rule distributions the way the reference kit's sentence
//! generator expands them token by token.

use crate::distribution::DistributionStore;
use crate::error::Result;
use crate::random::RandomStream;

const MIN_SENTENCES: i64 = 1;
const MAX_SENTENCES: i64 = 8;

fn expand_symbol(symbol: &str, dists: &DistributionStore, stream: &mut RandomStream, out: &mut Vec<String>) -> Result<()> {
    match symbol {
        "NOUN" => out.push(dists.find("nouns")?.pick_string(1, 1, stream).to_string()),
        "VERB" => out.push(dists.find("verbs")?.pick_string(1, 1, stream).to_string()),
        "ADJECTIVE" => out.push(dists.find("adjectives")?.pick_string(1, 1, stream).to_string()),
        "ADVERB" => out.push(dists.find("adverbs")?.pick_string(1, 1, stream).to_string()),
        "AUXILIARY" => out.push(dists.find("auxiliaries")?.pick_string(1, 1, stream).to_string()),
        "ARTICLE" => out.push(dists.find("articles")?.pick_string(1, 1, stream).to_string()),
        "PREPOSITION" => out.push(dists.find("prepositions")?.pick_string(1, 1, stream).to_string()),
        "NP" => {
            let production = dists.find("np")?.pick_string(1, 1, stream).to_string();
            expand_production(&production, dists, stream, out)?;
        }
        "VP" => {
            let production = dists.find("vp")?.pick_string(1, 1, stream).to_string();
            expand_production(&production, dists, stream, out)?;
        }
        other => out.push(other.to_lowercase()),
    }
    Ok(())
}

fn expand_production(
    production: &str,
    dists: &DistributionStore,
    stream: &mut RandomStream,
    out: &mut Vec<String>,
) -> Result<()> {
    for symbol in production.split_whitespace() {
        expand_symbol(symbol, dists, stream, out)?;
    }
    Ok(())
}

fn generate_sentence(dists: &DistributionStore, stream: &mut RandomStream) -> Result<String> {
    let grammar = dists.find("grammar")?;
    let production = grammar.pick_string(1, 1, stream).to_string();
    let mut words = Vec::new();
    expand_production(&production, dists, stream, &mut words)?;

    let terminator = dists.find("terminators")?.pick_string(1, 1, stream);
    let mut sentence = words.join(" ");
    sentence.push_str(terminator);
    Ok(sentence)
}

/// Generates a multi-sentence comment string, the way `*_comment` text
/// columns (`p_comment`, `o_comment`, `i_item_desc`, ...) are produced.
pub fn generate_text(dists: &DistributionStore, stream: &mut RandomStream) -> Result<String> {
    let sentence_count = stream.next_uniform_int(MIN_SENTENCES, MAX_SENTENCES);
    let mut sentences = Vec::with_capacity(sentence_count as usize);
    for _ in 0..sentence_count {
        sentences.push(generate_sentence(dists, stream)?);
    }
    Ok(sentences.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::{tpch_distributions, DistributionStore as Store};

    #[test]
    fn generate_text_is_deterministic_and_nonempty() {
        let mut store = Store::new();
        tpch_distributions(&mut store);
        let mut s1 = RandomStream::from_seed(7, 0);
        let mut s2 = RandomStream::from_seed(7, 0);
        let t1 = generate_text(&store, &mut s1).unwrap();
        let t2 = generate_text(&store, &mut s2).unwrap();
        assert_eq!(t1, t2);
        assert!(!t1.is_empty());
    }
}
