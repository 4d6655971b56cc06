pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"00_extensions.sql" => out.push_str(include_str!("../../../sql/00_extensions.sql")),
				"tables/001_communities.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_communities.sql")),
				"tables/002_users.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_users.sql")),
				"tables/003_likes.sql" =>
					out.push_str(include_str!("../../../sql/tables/003_likes.sql")),
				"tables/004_matches.sql" =>
					out.push_str(include_str!("../../../sql/tables/004_matches.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn expands_every_include() {
		let schema = render_schema();

		assert!(!schema.contains("\\ir "));
		assert!(schema.contains("CREATE TABLE IF NOT EXISTS communities"));
		assert!(schema.contains("CREATE TABLE IF NOT EXISTS users"));
		assert!(schema.contains("CREATE TABLE IF NOT EXISTS likes"));
		assert!(schema.contains("CREATE TABLE IF NOT EXISTS matches"));
	}

	#[test]
	fn matches_carry_the_unordered_pair_constraints() {
		let schema = render_schema();

		assert!(schema.contains("UNIQUE (user_a, user_b)"));
		assert!(schema.contains("CHECK (user_a < user_b)"));
	}
}
