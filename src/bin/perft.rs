use log::debug;
use structopt::StructOpt;

use mailbox_chess::board::Board;

#[derive(StructOpt, Debug)]
#[structopt(name = "perft", about = "mailbox move-generator node counter")]
struct Opt {
    /// FEN of the position to count from. Defaults to the standard starting
    /// position.
    #[structopt(long)]
    fen: Option<String>,

    /// Depth, in plies, to count to.
    #[structopt(short, long, default_value = "5")]
    depth: u32,

    /// Print each root move's subtree count instead of just the total.
    #[structopt(long)]
    split: bool,
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();

    let mut board = match &opt.fen {
        Some(fen) => Board::from_fen(fen).unwrap_or_else(|e| {
            eprintln!("invalid FEN: {}", e);
            std::process::exit(1);
        }),
        None => Board::starting_position(),
    };

    debug!("counting from:\n{}", board);

    if opt.split {
        let (total, split) = board.perft_split(opt.depth);
        let mut entries: Vec<(String, u64)> = split.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, count) in entries {
            println!("{}: {}", key, count);
        }
        println!("total: {}", total);
    } else {
        let count = board.perft(opt.depth);
        println!("{}", count);
    }
}
