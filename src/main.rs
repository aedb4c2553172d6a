// SPDX-License-Identifier: MPL-2.0
use office_day::app;

fn main() -> iced::Result {
    app::run()
}
