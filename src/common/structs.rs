/// Free-form error used where no dedicated error enum exists.
pub mod custom_error;
