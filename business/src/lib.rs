pub mod application {
    pub mod warehouse {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_product;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod user {
        pub mod model;
        pub mod repository;
    }
    pub mod warehouse {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_product;
            pub mod update;
        }
    }
}
