use hex;
use tiny_keccak::Keccak;
use unicode_segmentation::UnicodeSegmentation;

pub fn keccak256(i: &[u8]) -> Vec<u8> {
    let mut o = vec![0u8; 32];
    Keccak::keccak256(i, &mut o);
    return o;
}

pub fn get_label_from_name(name: &String) -> Vec<u8> {
    keccak256(name.as_bytes())
}

pub fn get_token_id_from_label(label: &Vec<u8>) -> String {
    hex::encode(label)
}

pub fn namehash(name: &str) -> Vec<u8> {
    let mut node = vec![0u8; 32];
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        node = get_subnode(&node, &keccak256(label.as_bytes()));
    }
    node
}

/// Node of `label` directly under `parent`.
pub fn get_subnode(parent: &[u8], label: &[u8]) -> Vec<u8> {
    keccak256(&[parent, label].concat())
}

pub fn convert_namehash_to_hex_string(namehash: Vec<u8>) -> String {
    hex::encode(namehash)
}

/// Length of a label as users perceive it, in grapheme clusters.
pub fn label_length(label: &str) -> usize {
    label.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namehash_matches_known_vectors() {
        assert_eq!(namehash(""), vec![0u8; 32]);
        assert_eq!(
            convert_namehash_to_hex_string(namehash("eth")),
            "93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"
        );
        assert_eq!(
            convert_namehash_to_hex_string(namehash("alice.eth")),
            "787192fc5378cc32aa956ddfdedbf26b24e8d78e40109add0eea2c1a012c3dec"
        );
    }

    #[test]
    fn subnode_composes_into_namehash() {
        let base = namehash("eth");
        let label = get_label_from_name(&String::from("alice"));
        assert_eq!(get_subnode(&base, &label), namehash("alice.eth"));
    }

    #[test]
    fn label_length_counts_graphemes() {
        assert_eq!(label_length("abc"), 3);
        assert_eq!(label_length("🇺🇸🇺🇸"), 2);
        assert_eq!(label_length("é"), 1);
        assert_eq!(label_length(""), 0);
    }
}
