use training_archive::problems::spiral;

fn main() {
    println!("{}", spiral::render(&spiral::solve()));
}
