pub mod application {
    pub mod recognition {
        pub mod recognize;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod recognition {
        pub mod errors;
        pub mod image;
        pub mod matcher;
        pub mod model;
        pub mod normalizer;
        pub mod services;
        pub mod similarity;
        pub mod use_cases {
            pub mod recognize;
        }
    }
}
