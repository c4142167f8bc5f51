#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};
use twoway::prelude::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Registry {
    revision: u32,
    names: TwoWayMap<String, u16>,
}

#[test]
fn test_nested_map_round_trip() -> anyhow::Result<()> {
    let mut names = TwoWayMap::new();
    names.insert("alpha".to_string(), 1)?;
    names.insert("beta".to_string(), 2)?;
    let registry = Registry { revision: 3, names };

    let bytes = postcard::to_stdvec(&registry)?;
    let decoded: Registry = postcard::from_bytes(&bytes)?;

    assert_eq!(decoded, registry);
    assert_eq!(decoded.names.left_of(&2)?, "beta");

    Ok(())
}

#[test]
fn test_non_bijective_input_is_rejected() -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Raw {
        revision: u32,
        names: Vec<(String, u16)>,
    }

    let raw = Raw {
        revision: 1,
        names: vec![("alpha".to_string(), 7), ("beta".to_string(), 7)],
    };
    let bytes = postcard::to_stdvec(&raw)?;

    assert!(postcard::from_bytes::<Registry>(&bytes).is_err());

    Ok(())
}
