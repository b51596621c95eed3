//! Fixed list of branch locations an order can be built for.

pub const SUCURSALES: [&str; 9] = [
    "CASA CENTRAL",
    "SAN JUSTO",
    "ITUZAINGÓ",
    "CIUDADELA",
    "MORENO",
    "MORENO II",
    "SAN MIGUEL",
    "MORÓN",
    "MERLO",
];
