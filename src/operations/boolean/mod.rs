mod profile;
mod subtract;

pub use subtract::Subtract;
