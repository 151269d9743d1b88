use super::Blueprint;
use crate::layout::Layout;

const TKINTER_MAIN: &str = r#"import tkinter as tk
from tkinter import messagebox

class App(tk.Tk):
    def __init__(self):
        super().__init__()
        self.title("Tkinter App")
        self.geometry("300x200")

        self.label = tk.Label(self, text="Hello, Tkinter!")
        self.label.pack(pady=20)

        self.button = tk.Button(self, text="Click Me", command=self.on_button_click)
        self.button.pack()

    def on_button_click(self):
        messagebox.showinfo("Info", "Button clicked!")

if __name__ == "__main__":
    app = App()
    app.mainloop()
"#;

const PYQT5_MAIN: &str = r#"import sys
from PyQt5.QtWidgets import QApplication, QMainWindow, QLabel, QPushButton

class MainWindow(QMainWindow):
    def __init__(self):
        super().__init__()
        self.setWindowTitle("PyQt5 App")
        self.setGeometry(100, 100, 400, 300)

        self.label = QLabel("Hello, PyQt5!", self)
        self.label.move(150, 100)

        self.button = QPushButton("Click Me", self)
        self.button.move(150, 150)
        self.button.clicked.connect(self.on_button_click)

    def on_button_click(self):
        self.label.setText("Button Clicked!")

if __name__ == "__main__":
    app = QApplication(sys.argv)
    window = MainWindow()
    window.show()
    sys.exit(app.exec_())
"#;

const KIVY_MAIN: &str = r#"from kivy.app import App
from kivy.uix.button import Button
from kivy.uix.boxlayout import BoxLayout

class MyApp(App):
    def build(self):
        layout = BoxLayout(orientation='vertical')
        btn = Button(text='Hello Kivy', size_hint=(0.5, 0.5),
                     pos_hint={'center_x': 0.5, 'center_y': 0.5})
        layout.add_widget(btn)
        return layout

if __name__ == '__main__':
    MyApp().run()
"#;

const PYGAME_MAIN: &str = r#"import pygame
import sys

# Initialize pygame
pygame.init()

# Screen dimensions
WIDTH, HEIGHT = 800, 600
screen = pygame.display.set_mode((WIDTH, HEIGHT))
pygame.display.set_caption("Pygame Project")

# Colors
WHITE = (255, 255, 255)
RED = (255, 0, 0)

# Game loop
clock = pygame.time.Clock()
running = True

while running:
    for event in pygame.event.get():
        if event.type == pygame.QUIT:
            running = False

    # Fill the screen with white
    screen.fill(WHITE)

    # Draw a red circle
    pygame.draw.circle(screen, RED, (WIDTH//2, HEIGHT//2), 50)

    # Update the display
    pygame.display.flip()

    # Cap the frame rate
    clock.tick(60)

pygame.quit()
sys.exit()
"#;

pub fn tkinter(_: &Blueprint<'_>, layout: &mut Layout) {
    layout.file("src/main.py", TKINTER_MAIN);
}

pub fn pyqt5(_: &Blueprint<'_>, layout: &mut Layout) {
    layout.file("src/main.py", PYQT5_MAIN);
}

pub fn kivy(_: &Blueprint<'_>, layout: &mut Layout) {
    layout.file("src/main.py", KIVY_MAIN);
}

pub fn pygame(_: &Blueprint<'_>, layout: &mut Layout) {
    layout.file("src/main.py", PYGAME_MAIN);
}
