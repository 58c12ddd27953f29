use snafu::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("required sequence argument is absent"))]
    AbsentArgument,
    #[snafu(display("sequence has no current element"))]
    NoCurrentElement,
}
