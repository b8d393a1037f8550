/// Helper macro to build a `Vec` of [`AllowlistEntry`] values
///
/// Each element is an `(id, amount, address)` tuple: the numeric fields
/// take any unsigned integer expression, and the address is a hex string
/// literal (with or without a `0x` prefix).
///
/// ```rust
/// # use canopy::*;
/// let entries = entries![
///     (1, 100, "0x319a0cfD7595b0085fF6003643C7eD685269F851"),
///     (2, 50, "270e63f5ec6e6b5e3003ba77392c17f60c9f4e75"),
/// ];
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].id, U256::new(1));
/// ```
///
/// [`AllowlistEntry`]: crate::AllowlistEntry
#[macro_export]
macro_rules! entries {
    [$( ($id:expr, $amount:expr, $addr:expr) ),* $(,)?] => {
        vec![
            $(
                $crate::AllowlistEntry::new(
                    $crate::U256::new($id as u128),
                    $crate::U256::new($amount as u128),
                    $addr.parse().expect("invalid address literal"),
                ),
            )*
        ]
    };
}

#[cfg(test)]
mod tests {
    use ethnum::U256;

    use crate::AllowlistEntry;

    #[test]
    fn basic_syntax_test() {
        let _e: Vec<AllowlistEntry> = entries![];
        let _e = entries![(1, 2, "0x319a0cfD7595b0085fF6003643C7eD685269F851")];
        let _e = entries![(1, 2, "0x319a0cfD7595b0085fF6003643C7eD685269F851"),];

        let amount = 500u64;
        let entries = entries![
            (1, amount, "0x319a0cfD7595b0085fF6003643C7eD685269F851"),
            (2, 50, "0x270E63f5EC6e6B5E3003ba77392c17f60C9f4E75"),
        ];

        assert_eq!(entries[0].amount, U256::new(500));
        assert_eq!(entries[1].id, U256::new(2));
    }
}
