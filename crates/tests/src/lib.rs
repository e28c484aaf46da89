#[cfg(test)]
mod common;

#[cfg(test)]
mod guard_scenario_tests;

#[cfg(test)]
mod menu_visibility_tests;

#[cfg(test)]
mod session_roundtrip_tests;

#[cfg(test)]
mod login_flow_tests;
