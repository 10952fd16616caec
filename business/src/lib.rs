pub mod application {
    pub mod card {
        pub mod scan;
    }
}

pub mod domain {
    pub mod logger;
    pub mod card {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod scan;
        }
    }
}
