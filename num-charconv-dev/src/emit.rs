use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::tables::{D2fixedTables, D2sTables, ADDITIONAL_BITS};

fn pairs(rows: &[[u64; 2]]) -> Vec<TokenStream> {
    rows.iter()
        .map(|[lo, hi]| {
            let lo = Literal::u64_unsuffixed(*lo);
            let hi = Literal::u64_unsuffixed(*hi);
            quote! { (#lo, #hi) }
        })
        .collect()
}

fn triples(rows: &[[u64; 3]]) -> Vec<TokenStream> {
    rows.iter()
        .map(|row| {
            let words = row.iter().map(|w| Literal::u64_unsuffixed(*w));
            quote! { [#(#words),*] }
        })
        .collect()
}

fn unsuffixed<T: Copy + Into<u64>>(values: &[T]) -> Vec<Literal> {
    values
        .iter()
        .map(|v| Literal::u64_unsuffixed((*v).into()))
        .collect()
}

pub fn d2s_full_table(tables: &D2sTables) -> TokenStream {
    let inv_size = Literal::usize_unsuffixed(tables.pow5_inv_split.len());
    let size = Literal::usize_unsuffixed(tables.pow5_split.len());
    let inv = pairs(&tables.pow5_inv_split);
    let pos = pairs(&tables.pow5_split);
    quote! {
        pub(crate) const DOUBLE_POW5_INV_TABLE_SIZE: usize = #inv_size;
        pub(crate) const DOUBLE_POW5_TABLE_SIZE: usize = #size;

        pub(crate) static DOUBLE_POW5_INV_SPLIT: [(u64, u64); DOUBLE_POW5_INV_TABLE_SIZE] = [
            #(#inv),*
        ];

        pub(crate) static DOUBLE_POW5_SPLIT: [(u64, u64); DOUBLE_POW5_TABLE_SIZE] = [
            #(#pos),*
        ];
    }
}

pub fn d2fixed_full_table(tables: &D2fixedTables) -> TokenStream {
    let table_size = Literal::usize_unsuffixed(tables.pow10_offset.len());
    let table_size_2 = Literal::usize_unsuffixed(tables.min_block_2.len());
    let additional_bits = Literal::u32_unsuffixed(ADDITIONAL_BITS);
    let split_len = Literal::usize_unsuffixed(tables.pow10_split.len());
    let split_len_2 = Literal::usize_unsuffixed(tables.pow10_split_2.len());

    let offset = unsuffixed(&tables.pow10_offset);
    let split = triples(&tables.pow10_split);
    let min_block = unsuffixed(&tables.min_block_2);
    let offset_2 = unsuffixed(&tables.pow10_offset_2);
    let split_2 = triples(&tables.pow10_split_2);

    quote! {
        pub(crate) const TABLE_SIZE: usize = #table_size;

        pub(crate) static POW10_OFFSET: [u16; TABLE_SIZE] = [#(#offset),*];

        pub(crate) static POW10_SPLIT: [[u64; 3]; #split_len] = [
            #(#split),*
        ];

        pub(crate) const TABLE_SIZE_2: usize = #table_size_2;
        pub(crate) const ADDITIONAL_BITS_2: u32 = #additional_bits;

        pub(crate) static MIN_BLOCK_2: [u8; TABLE_SIZE_2] = [#(#min_block),*];

        pub(crate) static POW10_OFFSET_2: [u16; TABLE_SIZE_2 + 1] = [#(#offset_2),*];

        pub(crate) static POW10_SPLIT_2: [[u64; 3]; #split_len_2] = [
            #(#split_2),*
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d2s_full_table_tokens() {
        let tables = D2sTables {
            pow5_inv_split: vec![[1, 2]],
            pow5_split: vec![[3, 4], [5, 6]],
        };
        let code: String = d2s_full_table(&tables)
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert!(code.contains("DOUBLE_POW5_INV_TABLE_SIZE:usize=1;"));
        assert!(code.contains("DOUBLE_POW5_TABLE_SIZE:usize=2;"));
        assert!(code.contains("[(1,2)]"));
        assert!(code.contains("[(3,4),(5,6)]"));
    }
}
