pub mod decode;
pub mod encode;
pub mod fits;
pub mod table;
