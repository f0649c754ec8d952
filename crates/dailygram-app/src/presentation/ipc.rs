use specta::{NamedType, TypeMap};

use crate::application::dtos::{
    ActivitySummaryDto, FeedAccessDto, LeaderboardDto, LeaderboardRowDto,
};
use crate::presentation::error::CommandError;

fn register<T: NamedType>(map: &mut TypeMap) {
    let definition = T::definition_named_data_type(map);
    map.insert(T::sid(), definition);
}

/// Every type a display layer receives from, or sends to, the commands.
/// Nested types such as `Period` and `FeedAccess` are pulled in by reference.
pub fn types() -> TypeMap {
    let mut map = TypeMap::default();
    register::<LeaderboardDto>(&mut map);
    register::<LeaderboardRowDto>(&mut map);
    register::<ActivitySummaryDto>(&mut map);
    register::<FeedAccessDto>(&mut map);
    register::<CommandError>(&mut map);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use specta::Language;
    use specta_typescript::{BigIntExportBehavior, Typescript};

    #[test]
    fn test_types_registers_command_payloads() {
        let map = types();
        assert!(map.contains_key(LeaderboardDto::sid()));
        assert!(map.contains_key(CommandError::sid()));
        assert!(map.len() >= 5);
    }

    #[test]
    fn test_typescript_export_names_every_payload() {
        let output = Typescript::default()
            .bigint(BigIntExportBehavior::Number)
            .export(types())
            .unwrap();

        for name in [
            "LeaderboardDto",
            "LeaderboardRowDto",
            "ActivitySummaryDto",
            "FeedAccessDto",
            "CommandError",
        ] {
            assert!(output.contains(&format!("export type {name}")), "missing {name}");
        }
    }
}
