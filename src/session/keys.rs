/// 令牌存储键，带版本号，格式变化时升级版本即可让旧值失效
const TOKEN_KEY: &str = "Admin-Token:v1";

/// 生成令牌存储键，共享后端（如 Redis）可以加前缀隔离不同实例
pub fn token_key(prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, TOKEN_KEY),
        _ => TOKEN_KEY.to_string(),
    }
}
