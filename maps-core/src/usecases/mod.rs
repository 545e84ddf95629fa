mod geocode_address;


pub use self::geocode_address::*;
