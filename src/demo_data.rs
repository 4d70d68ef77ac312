use crate::listing::{build_from_paths, CatalogTree};

// Demo catalog: a small object store with a few nested prefixes
const DEMO_PATHS: &[&str] = &[
    "landing/",
    "raw/sales/2023/orders.csv",
    "raw/sales/2023/returns.csv",
    "raw/sales/2024/orders.csv",
    "raw/sales/2024/returns.csv",
    "raw/hr/people.parquet",
    "raw/hr/payroll/2024-01.parquet",
    "raw/hr/payroll/2024-02.parquet",
    "curated/customers/",
    "curated/products/catalog.json",
    "exports/finance/q1.xlsx",
    "exports/finance/q2.xlsx",
];

pub fn load_demo_tree(root_name: &str, separator: &str) -> CatalogTree {
    let paths: Vec<String> = DEMO_PATHS
        .iter()
        .map(|path| path.replace('/', separator))
        .collect();
    build_from_paths(paths.iter().map(String::as_str), root_name, separator)
}
