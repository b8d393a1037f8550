use std::fmt;

use ethnum::U256;
use serde::{de, Deserializer, Serializer};

pub(super) fn serialize<S>(u: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // decimal keeps the values readable and avoids JSON number precision
    serializer.collect_str(u)
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    struct U256Visitor;

    impl de::Visitor<'_> for U256Visitor {
        type Value = U256;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an unsigned integer, a decimal string, or a 0x-prefixed hex string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<U256, E> {
            Ok(U256::from(v))
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<U256, E> {
            let parsed = match s.strip_prefix("0x") {
                Some(hex) => U256::from_str_radix(hex, 16),
                None => U256::from_str_radix(s, 10),
            };

            parsed.map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U256Visitor)
}
