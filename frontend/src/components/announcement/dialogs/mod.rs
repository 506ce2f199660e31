pub mod accessibility;
