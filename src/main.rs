use admin_console_client::{
    ApiError, AppState,
    api::models::{DateRange, LoginForm, LoginInfoQuery, PageQuery, SortOrder},
    config::Config,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "admin-console", about = "管理控制台命令行客户端")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 获取验证码
    Captcha,
    /// 登录并保存令牌
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        #[arg(long)]
        tenant: Option<String>,
        /// 验证码答案
        #[arg(long, requires = "uuid")]
        code: Option<String>,
        /// 验证码编号
        #[arg(long)]
        uuid: Option<String>,
    },
    /// 退出登录
    Logout,
    /// 查看本地是否保存了令牌
    Token,
    /// 当前用户信息
    Whoami,
    /// 路由/菜单
    Routes,
    /// 登录日志
    LoginInfo {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = PageQuery::DEFAULT_PAGE_SIZE)]
        size: u32,
        #[arg(long)]
        user_name: Option<String>,
        #[arg(long)]
        ipaddr: Option<String>,
        /// 0 成功，1 失败
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        order_by: Option<String>,
        #[arg(long, value_enum, default_value_t = Order::Desc)]
        order: Order,
        /// 开始日期 YYYY-MM-DD
        #[arg(long, requires = "end")]
        begin: Option<NaiveDate>,
        /// 结束日期 YYYY-MM-DD
        #[arg(long, requires = "begin")]
        end: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Asc,
    Desc,
}

impl From<Order> for SortOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => SortOrder::Ascending,
            Order::Desc => SortOrder::Descending,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ApiError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(state: &AppState, command: Command) -> Result<(), ApiError> {
    let client = &state.client;
    match command {
        Command::Captcha => print_json(&client.get_code_img().await?),
        Command::Login {
            username,
            password,
            tenant,
            code,
            uuid,
        } => {
            let mut form = LoginForm::new(username, password);
            if let Some(tenant) = tenant {
                form = form.with_tenant(tenant);
            }
            form.code = code;
            form.uuid = uuid;
            let result = client.login(&form).await?;
            print_json(&result)
        }
        Command::Logout => client.logout().await,
        Command::Token => {
            let stored = state.session.has_token().await;
            println!("{}: {}", state.session.key(), if stored { "已保存" } else { "无" });
            Ok(())
        }
        Command::Whoami => print_json(&client.get_info().await?),
        Command::Routes => print_json(&client.get_routers().await?),
        Command::LoginInfo {
            page,
            size,
            user_name,
            ipaddr,
            status,
            order_by,
            order,
            begin,
            end,
        } => {
            let mut query = LoginInfoQuery::new(PageQuery::new(page, size)?);
            query.user_name = user_name;
            query.ipaddr = ipaddr;
            query.status = status;
            if let Some(column) = order_by {
                query = query.order_by(column, order.into());
            }
            if let (Some(begin), Some(end)) = (begin, end) {
                query = query.date_range(DateRange::new(begin, end)?);
            }
            print_json(&client.list_login_info(&query).await?)
        }
    }
}

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration (API_BASE_URL)");
    tracing::debug!("Using API at {}", config.api_base_url);

    let state = AppState::from_config(config).expect("Failed to initialise console client");

    if let Err(e) = run(&state, cli.command).await {
        if e.is_unauthenticated() {
            // 令牌失效，清掉本地令牌，提示重新登录
            state.session.remove_token().await;
            tracing::error!("{}，请执行 `admin-console login`", e);
        } else {
            tracing::error!("{}", e);
        }
        std::process::exit(1);
    }
}
